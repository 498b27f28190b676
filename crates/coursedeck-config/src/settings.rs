//! Validated dashboard configuration

use crate::schema::RawConfig;

/// Validated configuration ready for use by the assembler
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Ceiling on closed sessions flagged for statistics per request.
    /// 0 means closed sessions are never flagged.
    pub max_closed_session_stats: usize,

    /// Creation-recency window for closed sessions, in days
    pub recent_window_days: i64,

    /// Permitted grace-period durations, in minutes
    pub grace_period_minutes: Vec<u32>,

    /// Grace period selected when a session supplies none
    pub default_grace_period: u32,

    /// Permitted timezone offsets for the picker
    pub timezone_offsets: Vec<f64>,

    /// Offset selected when a session supplies none
    pub default_timezone_offset: f64,

    /// Instructions text pre-filled into an empty form
    pub default_instructions: String,
}

impl DashboardConfig {
    /// Convert from raw config; absent fields fall back to the defaults
    pub fn from_raw(raw: RawConfig) -> Self {
        let defaults = Self::default();

        Self {
            max_closed_session_stats: raw
                .stats
                .max_closed_session_stats
                .unwrap_or(defaults.max_closed_session_stats),
            recent_window_days: raw
                .stats
                .recent_window_days
                .unwrap_or(defaults.recent_window_days),
            grace_period_minutes: raw
                .form
                .grace_period_minutes
                .unwrap_or(defaults.grace_period_minutes),
            default_grace_period: raw
                .form
                .default_grace_period
                .unwrap_or(defaults.default_grace_period),
            timezone_offsets: raw
                .form
                .timezone_offsets
                .unwrap_or(defaults.timezone_offsets),
            default_timezone_offset: raw
                .form
                .default_timezone_offset
                .unwrap_or(defaults.default_timezone_offset),
            default_instructions: raw
                .form
                .default_instructions
                .unwrap_or(defaults.default_instructions),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            max_closed_session_stats: 5,
            recent_window_days: 365,
            grace_period_minutes: vec![0, 5, 10, 15, 20, 25, 30],
            default_grace_period: 15,
            timezone_offsets: vec![
                -12.0, -11.0, -10.0, -9.0, -8.0, -7.0, -6.0, -5.0, -4.5, -4.0, -3.5, -3.0, -2.0,
                -1.0, 0.0, 1.0, 2.0, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 5.75, 6.0, 6.5, 7.0, 8.0, 8.75,
                9.0, 9.5, 10.0, 10.5, 11.0, 11.5, 12.0, 12.75, 13.0,
            ],
            default_timezone_offset: 0.0,
            default_instructions: "Please answer all the given questions.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawForm, RawStats};

    #[test]
    fn default_domains_are_consistent() {
        let config = DashboardConfig::default();
        assert!(config
            .grace_period_minutes
            .contains(&config.default_grace_period));
        assert!(config
            .timezone_offsets
            .contains(&config.default_timezone_offset));
    }

    #[test]
    fn from_raw_keeps_defaults_for_absent_fields() {
        let raw = RawConfig {
            config_version: 1,
            stats: RawStats {
                max_closed_session_stats: Some(2),
                recent_window_days: None,
            },
            form: RawForm::default(),
        };

        let config = DashboardConfig::from_raw(raw);
        assert_eq!(config.max_closed_session_stats, 2);
        assert_eq!(config.recent_window_days, 365);
        assert_eq!(config.default_grace_period, 15);
    }
}
