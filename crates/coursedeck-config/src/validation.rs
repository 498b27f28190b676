//! Validation for the effective dashboard configuration

use thiserror::Error;

use crate::DashboardConfig;

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("grace_period_minutes must not be empty")]
    EmptyGracePeriods,

    #[error("default_grace_period {0} is not in grace_period_minutes")]
    DefaultGraceNotListed(u32),

    #[error("timezone_offsets must not be empty")]
    EmptyTimezones,

    #[error("default_timezone_offset {0} is not in timezone_offsets")]
    DefaultTimezoneNotListed(f64),

    #[error("timezone offset {0} is not finite")]
    NonFiniteOffset(f64),

    #[error("recent_window_days must not be negative: {0}")]
    NegativeRecentWindow(i64),
}

/// Collect every problem with the effective configuration
pub fn validate_config(config: &DashboardConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.grace_period_minutes.is_empty() {
        errors.push(ValidationError::EmptyGracePeriods);
    } else if !config
        .grace_period_minutes
        .contains(&config.default_grace_period)
    {
        errors.push(ValidationError::DefaultGraceNotListed(
            config.default_grace_period,
        ));
    }

    for &offset in &config.timezone_offsets {
        if !offset.is_finite() {
            errors.push(ValidationError::NonFiniteOffset(offset));
        }
    }

    if config.timezone_offsets.is_empty() {
        errors.push(ValidationError::EmptyTimezones);
    } else if !config
        .timezone_offsets
        .contains(&config.default_timezone_offset)
    {
        errors.push(ValidationError::DefaultTimezoneNotListed(
            config.default_timezone_offset,
        ));
    }

    if config.recent_window_days < 0 {
        errors.push(ValidationError::NegativeRecentWindow(
            config.recent_window_days,
        ));
    }

    errors
}
