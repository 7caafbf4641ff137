//! Runtime thresholds for gesture classification and swipe channels.

use chatpose_animation::{AnimationType, SpringSpec};
use web_time::Duration;

use crate::error::{ensure_non_negative, ensure_positive, ConfigError};
use crate::gesture_constants::{
    DATE_LABEL_MARGIN, DATE_LABEL_MIN_WIDTH, DATE_REVEAL_MAX_DRAG, LONG_PRESS_TIMEOUT_MILLIS,
    REPLY_MAX_RATIO, REPLY_THRESHOLD, SWIPE_DETECTION_DISTANCE, SWIPE_DIRECTION_RATIO,
};

/// Thresholds for turning a press into a swipe, a scroll or a long press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub detection_distance: f32,
    pub direction_ratio: f32,
    pub long_press_timeout: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            detection_distance: SWIPE_DETECTION_DISTANCE,
            direction_ratio: SWIPE_DIRECTION_RATIO,
            long_press_timeout: Duration::from_millis(LONG_PRESS_TIMEOUT_MILLIS),
        }
    }
}

impl GestureConfig {
    pub fn with_detection_distance(mut self, distance: f32) -> Self {
        self.detection_distance = distance;
        self
    }

    pub fn with_direction_ratio(mut self, ratio: f32) -> Self {
        self.direction_ratio = ratio;
        self
    }

    pub fn with_long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }

    pub fn long_press_timeout_nanos(&self) -> u64 {
        self.long_press_timeout.as_nanos().min(u64::MAX as u128) as u64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("detection_distance", self.detection_distance)?;
        if !(self.direction_ratio > 1.0) {
            return Err(ConfigError::DirectionRatioTooSmall {
                ratio: self.direction_ratio,
            });
        }
        ensure_positive(
            "long_press_timeout",
            self.long_press_timeout.as_secs_f32(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplyConfig {
    pub threshold: f32,
    /// Maximum drag as a multiple of `threshold`.
    pub max_ratio: f32,
    pub settle: AnimationType,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            threshold: REPLY_THRESHOLD,
            max_ratio: REPLY_MAX_RATIO,
            settle: AnimationType::Spring(SpringSpec::gentle_overshoot()),
        }
    }
}

impl ReplyConfig {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn max_drag(&self) -> f32 {
        self.threshold * self.max_ratio
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("reply.threshold", self.threshold)?;
        if !(self.max_ratio >= 1.0) {
            return Err(ConfigError::RatioBelowOne {
                field: "reply.max_ratio",
                value: self.max_ratio,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRevealConfig {
    pub max_drag: f32,
    pub label_min_width: f32,
    pub label_margin: f32,
    pub settle: AnimationType,
}

impl Default for DateRevealConfig {
    fn default() -> Self {
        Self {
            max_drag: DATE_REVEAL_MAX_DRAG,
            label_min_width: DATE_LABEL_MIN_WIDTH,
            label_margin: DATE_LABEL_MARGIN,
            settle: AnimationType::Spring(
                SpringSpec::default_spring().with_thresholds(0.05, 0.001),
            ),
        }
    }
}

impl DateRevealConfig {
    pub fn with_max_drag(mut self, max_drag: f32) -> Self {
        self.max_drag = max_drag;
        self
    }

    /// Horizontal room a revealed label needs beside the bubble.
    pub fn required_space(&self) -> f32 {
        self.label_min_width + self.label_margin
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("date_reveal.max_drag", self.max_drag)?;
        ensure_non_negative("date_reveal.label_min_width", self.label_min_width)?;
        ensure_non_negative("date_reveal.label_margin", self.label_margin)
    }
}

/// Everything a row needs to run its swipe channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeConfig {
    pub gesture: GestureConfig,
    pub reply: ReplyConfig,
    pub date_reveal: DateRevealConfig,
}

impl SwipeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture.validate()?;
        self.reply.validate()?;
        self.date_reveal.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(SwipeConfig::default().validate(), Ok(()));
        assert_eq!(ReplyConfig::default().max_drag(), 72.0);
    }

    #[test]
    fn direction_ratio_must_bias_towards_scroll() {
        let config = GestureConfig::default().with_direction_ratio(1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DirectionRatioTooSmall { ratio: 1.0 })
        );
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let config = ReplyConfig::default().with_threshold(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "reply.threshold",
                ..
            })
        ));
    }

    #[test]
    fn nan_detection_distance_is_rejected() {
        let config = GestureConfig::default().with_detection_distance(f32::NAN);
        assert!(config.validate().is_err());
    }
}
