//! Seam to the external per-session action collaborator

use coursedeck_api::{FeedbackSession, InstructorPrivileges};
use coursedeck_util::CourseId;
use thiserror::Error;

/// Failure computing the actions blob for one row
#[derive(Debug, Error)]
pub enum ActionError {
    /// Underlying session or course disappeared concurrently
    #[error("Session does not exist: {course_id}/{name}")]
    SessionNotFound { course_id: CourseId, name: String },
}

/// Supplies the opaque per-row actions blob. Implemented outside this
/// core; a failure degrades that row to an empty blob rather than failing
/// the listing.
pub trait SessionActionSource: Send + Sync {
    fn actions_for(
        &self,
        session: &FeedbackSession,
        instructor: &InstructorPrivileges,
        section_names: &[String],
    ) -> Result<serde_json::Value, ActionError>;
}

/// Source that yields no actions; every row gets the empty blob
#[derive(Debug, Default)]
pub struct NoActions;

impl SessionActionSource for NoActions {
    fn actions_for(
        &self,
        _session: &FeedbackSession,
        _instructor: &InstructorPrivileges,
        _section_names: &[String],
    ) -> Result<serde_json::Value, ActionError> {
        Ok(serde_json::Value::Null)
    }
}
