//! Domain input types for the dashboard core

use chrono::{DateTime, Utc};
use coursedeck_util::{CourseId, SessionKey};
use serde::{Deserialize, Serialize};

/// When a session becomes discoverable by respondents.
///
/// Modeled as a tagged union so policy markers can never be confused with
/// literal timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionVisibleFrom {
    /// Visibility follows the session's opening time
    AtOpening,
    /// The session is never discoverable
    Never,
    /// Visible starting at an explicit timestamp
    At { time: DateTime<Utc> },
}

/// When computed results become visible to respondents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultsVisibleFrom {
    /// Results become visible exactly when the session becomes visible
    FollowVisible,
    /// Awaiting manual publish
    Later,
    /// Immediately published
    Now,
    /// Results are permanently hidden
    Never,
    /// Visible starting at an explicit timestamp
    At { time: DateTime<Utc> },
}

/// A feedback session as supplied by the external data layer.
/// Read-only to this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSession {
    pub course_id: CourseId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub opens_at: DateTime<Utc>,
    pub closes_at: DateTime<Utc>,

    /// Absent in legacy records; treated as `AtOpening`
    #[serde(default)]
    pub visible_from: Option<SessionVisibleFrom>,

    /// Absent in legacy records; treated as `Later` (awaiting manual publish)
    #[serde(default)]
    pub results_visible_from: Option<ResultsVisibleFrom>,

    /// Extra minutes after close during which late submissions are accepted.
    /// Consumed elsewhere; only its option list is built here.
    #[serde(default)]
    pub grace_period_minutes: Option<u32>,

    /// Numeric UTC offset for display, e.g. 8.0 or -4.5
    #[serde(default)]
    pub timezone_offset: Option<f64>,

    /// Free text, sanitized upstream; opaque to this core
    #[serde(default)]
    pub instructions: Option<String>,
}

impl FeedbackSession {
    /// Effective visibility policy, with the backward-compatible default for
    /// absent fields.
    pub fn visibility_policy(&self) -> SessionVisibleFrom {
        self.visible_from.unwrap_or(SessionVisibleFrom::AtOpening)
    }

    /// Effective results policy, with the backward-compatible default for
    /// absent fields.
    pub fn results_policy(&self) -> ResultsVisibleFrom {
        self.results_visible_from.unwrap_or(ResultsVisibleFrom::Later)
    }

    pub fn key(&self) -> SessionKey {
        SessionKey::new(self.course_id.clone(), self.name.clone())
    }
}

/// A course, reduced to what the dashboard needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
}

impl Course {
    pub fn new(id: impl Into<CourseId>) -> Self {
        Self { id: id.into() }
    }
}

/// Instructor capabilities consulted by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Privilege {
    ModifySession,
}

/// Per-course capability set for the current instructor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorPrivileges {
    #[serde(default)]
    pub can_modify_session: bool,
}

impl InstructorPrivileges {
    pub fn allowing_all() -> Self {
        Self {
            can_modify_session: true,
        }
    }

    pub fn read_only() -> Self {
        Self {
            can_modify_session: false,
        }
    }

    pub fn is_allowed(&self, privilege: Privilege) -> bool {
        match privilege {
            Privilege::ModifySession => self.can_modify_session,
        }
    }
}

/// Kind of feedback session offered by the new-session form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "TEAMEVALUATION")]
    TeamEvaluation,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Standard => "STANDARD",
            SessionType::TeamEvaluation => "TEAMEVALUATION",
        }
    }
}

/// Session availability state relative to its open/close boundaries.
/// Exactly one state holds for any given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionWindow {
    WaitingToOpen,
    Open,
    Closed,
}

impl SessionWindow {
    /// Instructor-facing status text for the sessions table
    pub fn status_label(&self) -> &'static str {
        match self {
            SessionWindow::WaitingToOpen => "Awaiting",
            SessionWindow::Open => "Open",
            SessionWindow::Closed => "Closed",
        }
    }
}

/// Resolved results-publication state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultsVisibility {
    /// Results track session visibility
    FollowsSessionVisibility,
    /// Awaiting manual publish
    AwaitingManualPublish,
    /// Already published
    Published,
    /// Visible once the given instant passes
    FromTimestamp { time: DateTime<Utc> },
    /// Permanently hidden
    Never,
}

/// Data-integrity defects detected during classification.
/// The classifier reports these; callers decide what to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFieldAnomaly {
    /// The close boundary precedes the open boundary
    InvertedWindow,
    /// Results carry a literal timestamp while the session itself is never
    /// visible; results stay hidden rather than leaking before the session
    ResultsWithoutVisibility,
}
