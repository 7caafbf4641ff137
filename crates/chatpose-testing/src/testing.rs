//! Frame pumping for anything that advances on frame time.

use chatpose_foundation::{RowArena, SwipeEffect};
use chatpose_ui::{ConversationSurface, OverlayPresentationController, PresentationEvent, SurfaceEffect};

/// One frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames a single pump may run before giving up.
pub const MAX_PUMP_FRAMES: usize = 2_000;

/// State that moves forward when handed a frame time.
pub trait FrameDriven {
    type Effect;

    fn advance_frame(&mut self, frame_time_nanos: u64) -> Vec<Self::Effect>;

    /// Nothing left to animate.
    fn is_settled(&self) -> bool;
}

impl FrameDriven for RowArena {
    type Effect = SwipeEffect;

    fn advance_frame(&mut self, frame_time_nanos: u64) -> Vec<SwipeEffect> {
        self.advance(frame_time_nanos).into_vec()
    }

    fn is_settled(&self) -> bool {
        !self.is_animating()
    }
}

impl FrameDriven for OverlayPresentationController {
    type Effect = PresentationEvent;

    fn advance_frame(&mut self, frame_time_nanos: u64) -> Vec<PresentationEvent> {
        self.advance(frame_time_nanos).into_vec()
    }

    fn is_settled(&self) -> bool {
        !self.is_animating()
    }
}

impl FrameDriven for ConversationSurface {
    type Effect = SurfaceEffect;

    fn advance_frame(&mut self, frame_time_nanos: u64) -> Vec<SurfaceEffect> {
        ConversationSurface::advance_frame(self, frame_time_nanos).into_vec()
    }

    fn is_settled(&self) -> bool {
        self.is_idle()
    }
}

/// Virtual frame clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDriver {
    now_nanos: u64,
    frame_nanos: u64,
    frames: usize,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FrameDriver {
    pub fn new(start_nanos: u64) -> Self {
        Self {
            now_nanos: start_nanos,
            frame_nanos: FRAME_NANOS,
            frames: 0,
        }
    }

    pub fn with_frame_nanos(mut self, frame_nanos: u64) -> Self {
        self.frame_nanos = frame_nanos.max(1);
        self
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    pub fn frame_nanos(&self) -> u64 {
        self.frame_nanos
    }

    /// Frames delivered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Delivers one frame at the current time, then moves the clock on.
    pub fn step<T: FrameDriven>(&mut self, target: &mut T) -> Vec<T::Effect> {
        let effects = target.advance_frame(self.now_nanos);
        self.now_nanos += self.frame_nanos;
        self.frames += 1;
        effects
    }

    /// Runs whole frames until `duration_nanos` has elapsed.
    pub fn advance_by<T: FrameDriven>(&mut self, target: &mut T, duration_nanos: u64) -> Vec<T::Effect> {
        let until = self.now_nanos + duration_nanos;
        let mut effects = Vec::new();
        while self.now_nanos < until {
            effects.extend(self.step(target));
        }
        effects
    }

    /// Runs frames until `target` settles. Returns every effect seen and
    /// whether it settled within [`MAX_PUMP_FRAMES`].
    pub fn pump_until_settled<T: FrameDriven>(&mut self, target: &mut T) -> (Vec<T::Effect>, bool) {
        let mut effects = Vec::new();
        for _ in 0..MAX_PUMP_FRAMES {
            effects.extend(self.step(target));
            if target.is_settled() {
                return (effects, true);
            }
        }
        log::warn!("gave up pumping after {MAX_PUMP_FRAMES} frames");
        (effects, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl FrameDriven for Countdown {
        type Effect = u64;

        fn advance_frame(&mut self, frame_time_nanos: u64) -> Vec<u64> {
            self.0 = self.0.saturating_sub(1);
            vec![frame_time_nanos]
        }

        fn is_settled(&self) -> bool {
            self.0 == 0
        }
    }

    #[test]
    fn pump_stops_once_settled() {
        let mut driver = FrameDriver::new(100);
        let mut countdown = Countdown(3);

        let (times, settled) = driver.pump_until_settled(&mut countdown);

        assert!(settled);
        assert_eq!(times, vec![100, 100 + FRAME_NANOS, 100 + 2 * FRAME_NANOS]);
        assert_eq!(driver.frames(), 3);
    }

    #[test]
    fn advance_by_covers_the_duration() {
        let mut driver = FrameDriver::new(0).with_frame_nanos(10);
        let mut countdown = Countdown(100);

        let times = driver.advance_by(&mut countdown, 35);

        assert_eq!(times, vec![0, 10, 20, 30]);
        assert_eq!(driver.now_nanos(), 40);
    }
}
