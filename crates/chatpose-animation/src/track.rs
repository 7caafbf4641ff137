//! A single animated scalar, advanced by frame time.

use crate::animation::{AnimationType, SpringSpec};

const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: f32 = 1_000_000_000.0;

/// Spring integration step. Small enough to stay stable for the stiffest
/// spring we ship (`SpringSpec::stiff`).
const SPRING_STEP_SECONDS: f32 = 1.0 / 240.0;

/// Frames further apart than this are integrated as if they were this far
/// apart, so a stalled frame clock cannot spin the integrator.
const MAX_FRAME_GAP_SECONDS: f32 = 1.0;

/// Outcome of advancing a track by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackStatus {
    /// Nothing was running.
    Idle,
    /// Still moving; call `advance` again next frame.
    Running,
    /// Reached its target on this frame.
    Finished,
}

/// Animated `f32` with explicit frame-time driving.
///
/// Retargeting (`animate_to`) always starts from the current value and keeps
/// the current velocity, so interrupting an animation never snaps.
#[derive(Clone, Debug)]
pub struct AnimatedFloat {
    value: f32,
    /// Units per second.
    velocity: f32,
    start: f32,
    target: f32,
    animation: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
}

impl AnimatedFloat {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            start: initial,
            target: initial,
            animation: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation
    }

    /// Starts animating from the current value towards `target`. Any running
    /// animation is replaced. The first frame after this call only records
    /// the start time.
    pub fn animate_to(&mut self, target: f32, animation: impl Into<AnimationType>) {
        self.start = self.value;
        self.target = target;
        self.animation = animation.into();
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = true;
        if let AnimationType::Tween(_) = self.animation {
            self.velocity = 0.0;
        }
    }

    /// Jumps to `value`, cancelling any running animation.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.start = value;
        self.target = value;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
    }

    /// Cancels a running animation, leaving the value where it is.
    /// Returns whether anything was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        self.velocity = 0.0;
        self.target = self.value;
        self.start = self.value;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        was_running
    }

    pub fn advance(&mut self, frame_time_nanos: u64) -> TrackStatus {
        if !self.running {
            return TrackStatus::Idle;
        }
        let finished = match self.animation {
            AnimationType::Tween(spec) => {
                let start = *self.start_time_nanos.get_or_insert(frame_time_nanos);
                let elapsed = frame_time_nanos.saturating_sub(start);
                let delay = spec.delay_millis * NANOS_PER_MILLI;
                if elapsed < delay {
                    false
                } else {
                    let duration = (spec.duration_millis * NANOS_PER_MILLI).max(1);
                    let linear = ((elapsed - delay) as f32 / duration as f32).clamp(0.0, 1.0);
                    let eased = spec.easing.transform(linear);
                    let next = self.start + (self.target - self.start) * eased;
                    if let Some(last) = self.last_frame_nanos {
                        let dt = frame_time_nanos.saturating_sub(last) as f32 / NANOS_PER_SECOND;
                        if dt > 0.0 {
                            self.velocity = (next - self.value) / dt;
                        }
                    }
                    self.value = next;
                    linear >= 1.0
                }
            }
            AnimationType::Spring(spec) => match self.last_frame_nanos {
                None => false,
                Some(last) => {
                    let gap = frame_time_nanos.saturating_sub(last) as f32 / NANOS_PER_SECOND;
                    if gap > MAX_FRAME_GAP_SECONDS {
                        log::trace!("spring frame gap of {gap:.3}s clamped");
                    }
                    self.integrate_spring(spec, gap.min(MAX_FRAME_GAP_SECONDS))
                }
            },
        };
        self.last_frame_nanos = Some(frame_time_nanos);

        if finished {
            self.value = self.target;
            self.start = self.target;
            self.velocity = 0.0;
            self.start_time_nanos = None;
            self.last_frame_nanos = None;
            self.running = false;
            TrackStatus::Finished
        } else {
            TrackStatus::Running
        }
    }

    /// Semi-implicit Euler over `dt` seconds. Returns true once settled.
    fn integrate_spring(&mut self, spec: SpringSpec, dt: f32) -> bool {
        let damping = spec.damping_coefficient();
        let mut remaining = dt;
        while remaining > 0.0 {
            let step = SPRING_STEP_SECONDS.min(remaining);
            let displacement = self.value - self.target;
            let acceleration = -spec.stiffness * displacement - damping * self.velocity;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;
            remaining -= step;
        }
        self.velocity.abs() < spec.velocity_threshold
            && (self.value - self.target).abs() < spec.position_threshold
    }
}

impl Default for AnimatedFloat {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
