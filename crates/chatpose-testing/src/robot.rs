//! Robot-style driver for a conversation surface.
//!
//! A [`SurfaceRobot`] owns a [`ConversationSurface`] and a virtual clock.
//! Pointer samples are stamped with the clock, frames are delivered between
//! them, and everything the surface reports is recorded in order so a test
//! can assert on the whole exchange afterwards.
//!
//! ```
//! use chatpose_testing::{standard_surface, SurfaceRobot, INCOMING_BUBBLE};
//! use chatpose_ui_graphics::Point;
//!
//! let mut robot = SurfaceRobot::new(standard_surface());
//! let start = INCOMING_BUBBLE.center();
//! robot.drag(start, Point::new(start.x + 90.0, start.y), 6);
//! robot.wait_for_idle();
//! assert!(robot.surface().is_idle());
//! ```

use chatpose_foundation::{PointerEventKind, PointerId, PointerSample};
use chatpose_ui::{ConversationSurface, OverlayAction, SafeZone, SurfaceEffect};
use chatpose_ui_graphics::{Point, Size};

use crate::testing::FrameDriver;

/// What happened to the samples of one scripted drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragReport {
    pub samples: usize,
    /// Samples the surface claimed; the rest belong to the scroll container.
    pub consumed: usize,
}

impl DragReport {
    pub fn passed_through(&self) -> usize {
        self.samples - self.consumed
    }
}

pub struct SurfaceRobot {
    surface: ConversationSurface,
    clock: FrameDriver,
    pointer_id: PointerId,
    position: Point,
    effects: Vec<SurfaceEffect>,
    unconsumed: Vec<PointerSample>,
}

impl SurfaceRobot {
    pub fn new(surface: ConversationSurface) -> Self {
        Self {
            surface,
            clock: FrameDriver::default(),
            pointer_id: 0,
            position: Point::ZERO,
            effects: Vec::new(),
            unconsumed: Vec::new(),
        }
    }

    pub fn with_pointer_id(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    pub fn surface(&self) -> &ConversationSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut ConversationSurface {
        &mut self.surface
    }

    pub fn into_surface(self) -> ConversationSurface {
        self.surface
    }

    pub fn now_nanos(&self) -> u64 {
        self.clock.now_nanos()
    }

    /// Every effect since the robot was created or last drained.
    pub fn effects(&self) -> &[SurfaceEffect] {
        &self.effects
    }

    pub fn take_effects(&mut self) -> Vec<SurfaceEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Samples the surface left for the scrollable container.
    pub fn unconsumed_samples(&self) -> &[PointerSample] {
        &self.unconsumed
    }

    /// Sends one sample at the current time. Returns whether the surface
    /// consumed it.
    pub fn send(&mut self, kind: PointerEventKind, position: Point) -> bool {
        let sample = PointerSample::new(kind, position, self.clock.now_nanos())
            .with_id(self.pointer_id);
        self.position = position;
        let effects = self.surface.on_pointer_event(&sample);
        self.effects.extend(effects);
        let consumed = sample.is_consumed();
        if !consumed {
            self.unconsumed.push(sample);
        }
        consumed
    }

    pub fn press(&mut self, position: Point) -> bool {
        self.send(PointerEventKind::Down, position)
    }

    pub fn move_to(&mut self, position: Point) -> bool {
        self.send(PointerEventKind::Move, position)
    }

    /// Lifts the pointer where it last was.
    pub fn release(&mut self) -> bool {
        self.send(PointerEventKind::Up, self.position)
    }

    pub fn cancel(&mut self) -> bool {
        self.send(PointerEventKind::Cancel, self.position)
    }

    /// Delivers a single frame.
    pub fn next_frame(&mut self) {
        let effects = self.clock.step(&mut self.surface);
        self.effects.extend(effects);
    }

    /// Delivers frames until `nanos` of virtual time have passed.
    pub fn advance_time(&mut self, nanos: u64) {
        let effects = self.clock.advance_by(&mut self.surface, nanos);
        self.effects.extend(effects);
    }

    /// Delivers frames until the surface is idle. A held pointer keeps it
    /// busy, so this returns `false` while pressed.
    pub fn wait_for_idle(&mut self) -> bool {
        if self.surface.is_idle() {
            return true;
        }
        let (effects, settled) = self.clock.pump_until_settled(&mut self.surface);
        self.effects.extend(effects);
        settled
    }

    /// Presses at `from`, moves to `to` over `steps` samples one frame
    /// apart, and releases there.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) -> DragReport {
        let mut report = DragReport::default();
        self.press_and_move(from, to, steps, &mut report);
        self.next_frame();
        report.samples += 1;
        if self.release() {
            report.consumed += 1;
        }
        report
    }

    /// Like [`drag`](Self::drag) but leaves the pointer down.
    pub fn drag_and_hold(&mut self, from: Point, to: Point, steps: usize) -> DragReport {
        let mut report = DragReport::default();
        self.press_and_move(from, to, steps, &mut report);
        report
    }

    /// Presses at `position` and holds past the long-press timeout.
    pub fn long_press(&mut self, position: Point) {
        self.press(position);
        let hold = self.surface.config().gesture.long_press_timeout_nanos() + self.clock.frame_nanos();
        self.advance_time(hold);
        self.release();
    }

    pub fn click_at(&mut self, position: Point) -> bool {
        let pressed = self.press(position);
        self.next_frame();
        let released = self.release();
        pressed || released
    }

    pub fn select(&mut self, action: OverlayAction) {
        let effects = self.surface.select_action(action);
        self.effects.extend(effects);
    }

    pub fn back(&mut self) -> bool {
        let effects = self.surface.on_back_navigation();
        let handled = !effects.is_empty();
        self.effects.extend(effects);
        handled
    }

    pub fn set_safe_zone(&mut self, safe_zone: SafeZone) {
        let effects = self.surface.on_safe_zone_changed(safe_zone);
        self.effects.extend(effects);
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        let effects = self.surface.on_viewport_changed(viewport);
        self.effects.extend(effects);
    }

    fn press_and_move(&mut self, from: Point, to: Point, steps: usize, report: &mut DragReport) {
        report.samples += 1;
        if self.press(from) {
            report.consumed += 1;
        }
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let position = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.next_frame();
            report.samples += 1;
            if self.move_to(position) {
                report.consumed += 1;
            }
        }
    }
}
