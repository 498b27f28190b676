//! Raw TOML schema, before validation

use serde::Deserialize;

/// Top-level raw config as parsed from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    pub config_version: u32,

    #[serde(default)]
    pub stats: RawStats,

    #[serde(default)]
    pub form: RawForm,
}

/// Raw statistics-admission settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStats {
    /// Ceiling on closed sessions flagged for statistics per request.
    /// 0 means closed sessions are never flagged.
    pub max_closed_session_stats: Option<usize>,

    /// How far back a closed session's creation may lie to still be
    /// flagged, in days
    pub recent_window_days: Option<i64>,
}

/// Raw form-domain settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForm {
    pub grace_period_minutes: Option<Vec<u32>>,
    pub default_grace_period: Option<u32>,
    pub timezone_offsets: Option<Vec<f64>>,
    pub default_timezone_offset: Option<f64>,
    pub default_instructions: Option<String>,
}
