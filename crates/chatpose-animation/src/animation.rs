//! Animation specs: easing curves, tweens and springs.

/// Easing curves for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Decelerating cubic curve.
    EaseOut,
    /// Material standard curve: quick start, gentle landing.
    FastOutSlowIn,
    /// Material incoming curve.
    LinearOutSlowIn,
    /// Material outgoing curve.
    FastOutLinearIn,
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).solve(fraction),
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
            Easing::LinearOutSlowIn => CubicBezier::new(0.0, 0.0, 0.2, 1.0).solve(fraction),
            Easing::FastOutLinearIn => CubicBezier::new(0.4, 0.0, 1.0, 1.0).solve(fraction),
        }
    }
}

/// Cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1), stored as polynomial
/// coefficients for both axes.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson first, bisection when the slope flattens out.
        let mut t = fraction;
        for _ in 0..8 {
            let error = self.x_at(t) - fraction;
            if error.abs() < 1e-6 {
                return self.y_at(t);
            }
            let slope = self.dx_at(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..20 {
            let error = self.x_at(t) - fraction;
            if error.abs() < 1e-6 {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        self.y_at(t)
    }
}

/// Time-based animation: duration, easing and optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Damped harmonic oscillator parameters.
///
/// Thresholds are in the animated value's own units (pixels for offsets,
/// unit fractions for progress values).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 is critically damped, below 1.0 overshoots, above 1.0 creeps in.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Settled once speed (units/second) drops below this...
    pub velocity_threshold: f32,
    /// ...and the distance to the target drops below this.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Slightly under-damped: decelerates and overshoots a little before
    /// settling.
    pub fn gentle_overshoot() -> Self {
        Self {
            damping_ratio: 0.75,
            stiffness: 400.0,
            velocity_threshold: 1.0,
            position_threshold: 0.1,
        }
    }

    pub fn stiff() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 3000.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn with_thresholds(mut self, velocity: f32, position: f32) -> Self {
        self.velocity_threshold = velocity;
        self.position_threshold = position;
        self
    }

    pub(crate) fn damping_coefficient(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

impl From<AnimationSpec> for AnimationType {
    fn from(spec: AnimationSpec) -> Self {
        AnimationType::Tween(spec)
    }
}

impl From<SpringSpec> for AnimationType {
    fn from(spec: SpringSpec) -> Self {
        AnimationType::Spring(spec)
    }
}
