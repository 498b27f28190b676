//! Configuration parsing and validation for the coursedeck dashboard
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - Statistics admission ceiling and recency window
//! - Fixed picker domains (grace periods, timezone offsets)
//! - Validation with clear error messages
//!
//! Every field is optional; `DashboardConfig::default()` carries the stock
//! domain constants.

mod schema;
mod settings;
mod validation;

pub use schema::*;
pub use settings::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<DashboardConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<DashboardConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    // Check version
    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let config = DashboardConfig::from_raw(raw);

    // Validate the effective values, not just the raw input, so a bad
    // default combination is caught no matter where it came from
    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_minimal_config() {
        let config = parse_config("config_version = 1").unwrap();
        assert_eq!(config.max_closed_session_stats, 5);
        assert_eq!(config.recent_window_days, 365);
        assert_eq!(config.default_grace_period, 15);
    }

    #[test]
    fn parse_overrides() {
        let content = r#"
            config_version = 1

            [stats]
            max_closed_session_stats = 3
            recent_window_days = 180

            [form]
            grace_period_minutes = [0, 10, 20]
            default_grace_period = 10
        "#;

        let config = parse_config(content).unwrap();
        assert_eq!(config.max_closed_session_stats, 3);
        assert_eq!(config.recent_window_days, 180);
        assert_eq!(config.grace_period_minutes, vec![0, 10, 20]);
        assert_eq!(config.default_grace_period, 10);
    }

    #[test]
    fn reject_wrong_version() {
        let result = parse_config("config_version = 99");
        assert!(matches!(result, Err(ConfigError::UnsupportedVersion(99))));
    }

    #[test]
    fn reject_default_grace_outside_domain() {
        let content = r#"
            config_version = 1

            [form]
            grace_period_minutes = [0, 5]
            default_grace_period = 15
        "#;

        let result = parse_config(content);
        assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "config_version = 1").unwrap();
        writeln!(file, "[stats]").unwrap();
        writeln!(file, "max_closed_session_stats = 7").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.max_closed_session_stats, 7);
    }

    #[test]
    fn load_config_missing_file() {
        let result = load_config("/nonexistent/coursedeck.toml");
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
