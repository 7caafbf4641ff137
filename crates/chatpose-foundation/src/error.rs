/// Rejected configuration value.
///
/// Configuration is the only fallible input of the interaction layer; pointer
/// streams and geometry are always accepted and handled best-effort.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A distance, threshold or duration that must be strictly positive.
    NonPositive { field: &'static str, value: f32 },
    /// A margin or spacing that must not be negative.
    Negative { field: &'static str, value: f32 },
    /// The swipe direction ratio must exceed 1 so diagonals favour scrolling.
    DirectionRatioTooSmall { ratio: f32 },
    /// A multiplier that must be at least 1.
    RatioBelowOne { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            ConfigError::DirectionRatioTooSmall { ratio } => {
                write!(f, "swipe direction ratio must be greater than 1, got {ratio}")
            }
            ConfigError::RatioBelowOne { field, value } => {
                write!(f, "{field} must be at least 1, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Checks that `value` is strictly positive.
pub fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this check too.
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Checks that `value` is zero or greater.
pub fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
