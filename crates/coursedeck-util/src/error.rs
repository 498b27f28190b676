//! Error types for the dashboard core

use thiserror::Error;

use crate::CourseId;

/// Core error type for dashboard assembly
#[derive(Debug, Error)]
pub enum DashboardError {
    /// No instructor record for a course referenced by a session or option
    /// list. The source of truth for permissions is external; it is never
    /// silently assumed permissive.
    #[error("No instructor record for course: {0}")]
    MissingPrivilegeData(CourseId),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DashboardError {
    pub fn missing_privilege(course_id: impl Into<CourseId>) -> Self {
        Self::MissingPrivilegeData(course_id.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_course() {
        let err = DashboardError::missing_privilege("cs1101");
        assert_eq!(err.to_string(), "No instructor record for course: cs1101");
    }
}
