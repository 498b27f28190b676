//! Assembly of the three dashboard view models
//!
//! Drives the classifier per session, the stats selector once per list,
//! and the option builders per dropdown, then returns plain view models.
//! One call, one snapshot, immutable output.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use coursedeck_api::{
    Course, CopyFromListing, DashboardView, FeedbackSession, InstructorPrivileges, NewSessionForm,
    Privilege, ResultsCheckboxes, ResultsVisibleFrom, SessionListing, SessionRow,
    SessionVisibleFrom, SessionType, VisibilityCheckboxes,
};
use coursedeck_config::DashboardConfig;
use coursedeck_util::{
    CourseId, DashboardError, Result, SessionKey, format_session_date, next_full_hour,
};
use tracing::{debug, warn};

use crate::{
    CourseSelectionHint, SessionActionSource, classify, course_options, flag_recent_sessions,
    grace_period_options, session_type_options, time_of_day_options, timezone_options,
};

/// One dashboard request's inputs.
///
/// `sessions` must be pre-sorted by `created_at` descending; the stats
/// selector's "most recent first" guarantee depends on it.
#[derive(Debug)]
pub struct AssemblyInput<'a> {
    pub courses: &'a [Course],
    pub instructors: &'a HashMap<CourseId, InstructorPrivileges>,
    pub sessions: &'a [FeedbackSession],
    /// Course to pre-select for a brand-new session
    pub default_course: Option<CourseId>,
    /// Session whose values pre-fill the form (re-edit / clone)
    pub form_defaults: Option<&'a FeedbackSession>,
    pub session_type: Option<SessionType>,
    /// Row to flash in the listing, typically just created or edited
    pub highlight: Option<SessionKey>,
    /// Section names per course, forwarded to the action collaborator
    pub section_names: &'a HashMap<CourseId, Vec<String>>,
}

/// Builds the dashboard view models from one input snapshot
pub struct DashboardAssembler<'a> {
    config: &'a DashboardConfig,
    actions: &'a dyn SessionActionSource,
}

impl<'a> DashboardAssembler<'a> {
    pub fn new(config: &'a DashboardConfig, actions: &'a dyn SessionActionSource) -> Self {
        Self { config, actions }
    }

    /// Assemble the new-session form, the sessions listing, and the
    /// copy-from listing.
    pub fn assemble(&self, input: &AssemblyInput<'_>, now: DateTime<Utc>) -> Result<DashboardView> {
        let form = self.build_form(input, now)?;
        let listing = self.build_listing(input, now)?;
        let copy_from = self.build_copy_from(input, now)?;

        debug!(
            courses = input.courses.len(),
            rows = listing.rows.len(),
            copy_from_rows = copy_from.rows.len(),
            "Dashboard assembled"
        );

        Ok(DashboardView {
            form,
            listing,
            copy_from,
        })
    }

    fn build_form(&self, input: &AssemblyInput<'_>, now: DateTime<Utc>) -> Result<NewSessionForm> {
        let defaults = input.form_defaults;
        let hint = CourseSelectionHint {
            filled_form_course: defaults.map(|s| s.course_id.clone()),
            default_course: input.default_course.clone(),
        };

        let start_date = match defaults {
            Some(s) => format_session_date(s.opens_at),
            None => format_session_date(next_full_hour(now)),
        };

        Ok(NewSessionForm {
            course_options: course_options(input.courses, input.instructors, &hint)?,
            course_id: input.default_course.clone(),
            session_name: defaults.map(|s| s.name.clone()).unwrap_or_default(),
            session_type_options: session_type_options(input.session_type),
            instructions: defaults
                .and_then(|s| s.instructions.clone())
                .unwrap_or_else(|| self.config.default_instructions.clone()),
            start_date,
            start_time_options: time_of_day_options(defaults.map(|s| s.opens_at)),
            end_date: defaults
                .map(|s| format_session_date(s.closes_at))
                .unwrap_or_default(),
            end_time_options: time_of_day_options(defaults.map(|s| s.closes_at)),
            grace_period_options: grace_period_options(
                defaults.and_then(|s| s.grace_period_minutes),
                self.config,
            ),
            timezone_options: timezone_options(
                defaults.and_then(|s| s.timezone_offset),
                self.config,
            ),
            visibility: visibility_checkboxes(defaults),
            results: results_checkboxes(defaults),
            submit_disabled: input.courses.is_empty(),
        })
    }

    fn build_listing(
        &self,
        input: &AssemblyInput<'_>,
        now: DateTime<Utc>,
    ) -> Result<SessionListing> {
        let rows = self.build_rows(input.sessions, input, now)?;
        Ok(SessionListing { rows })
    }

    fn build_copy_from(
        &self,
        input: &AssemblyInput<'_>,
        now: DateTime<Utc>,
    ) -> Result<CopyFromListing> {
        let mut filtered = Vec::new();
        for session in input.sessions {
            let privileges = input
                .instructors
                .get(&session.course_id)
                .ok_or_else(|| DashboardError::missing_privilege(session.course_id.clone()))?;
            if privileges.is_allowed(Privilege::ModifySession) {
                filtered.push(session.clone());
            }
        }

        let rows = self.build_rows(&filtered, input, now)?;

        let hint = CourseSelectionHint {
            filled_form_course: input.form_defaults.map(|s| s.course_id.clone()),
            default_course: input.default_course.clone(),
        };

        Ok(CopyFromListing {
            rows,
            source_session_name: input
                .form_defaults
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            course_options: course_options(input.courses, input.instructors, &hint)?,
        })
    }

    /// Build rows for one listing: recent flags come from a single greedy
    /// pass over exactly this slice, in its given order.
    fn build_rows(
        &self,
        sessions: &[FeedbackSession],
        input: &AssemblyInput<'_>,
        now: DateTime<Utc>,
    ) -> Result<Vec<SessionRow>> {
        let recent_flags = flag_recent_sessions(sessions, now, self.config);

        sessions
            .iter()
            .zip(recent_flags)
            .map(|(session, recent)| self.build_row(session, recent, input, now))
            .collect()
    }

    fn build_row(
        &self,
        session: &FeedbackSession,
        recent: bool,
        input: &AssemblyInput<'_>,
        now: DateTime<Utc>,
    ) -> Result<SessionRow> {
        let classification = classify(session, now);

        if let Some(anomaly) = classification.anomaly {
            warn!(
                course_id = %session.course_id,
                session = %session.name,
                anomaly = ?anomaly,
                "Malformed time fields; classified conservatively"
            );
        }

        let instructor = input
            .instructors
            .get(&session.course_id)
            .ok_or_else(|| DashboardError::missing_privilege(session.course_id.clone()))?;

        let empty = Vec::new();
        let section_names = input
            .section_names
            .get(&session.course_id)
            .unwrap_or(&empty);

        // A failed action computation degrades this row only
        let actions = match self.actions.actions_for(session, instructor, section_names) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(
                    course_id = %session.course_id,
                    session = %session.name,
                    error = %err,
                    "Action computation failed; row degrades to empty actions"
                );
                serde_json::Value::Null
            }
        };

        let highlight = input
            .highlight
            .as_ref()
            .is_some_and(|key| *key == session.key());

        Ok(SessionRow {
            course_id: session.course_id.clone(),
            name: session.name.clone(),
            status: classification.window,
            status_label: classification.window.status_label().to_string(),
            recent,
            highlight,
            actions,
        })
    }
}

fn visibility_checkboxes(defaults: Option<&FeedbackSession>) -> VisibilityCheckboxes {
    let policy = defaults.map(|s| s.visibility_policy());
    let literal = match policy {
        Some(SessionVisibleFrom::At { time }) => Some(time),
        _ => None,
    };
    let at_date = literal.is_some();

    VisibilityCheckboxes {
        at_open: matches!(policy, None | Some(SessionVisibleFrom::AtOpening)),
        at_date,
        at_date_value: literal.map(format_session_date).unwrap_or_default(),
        at_date_time_options: time_of_day_options(literal),
        at_date_disabled: !at_date,
        never: matches!(policy, Some(SessionVisibleFrom::Never)),
    }
}

fn results_checkboxes(defaults: Option<&FeedbackSession>) -> ResultsCheckboxes {
    let policy = defaults.map(|s| s.results_policy());
    let literal = match policy {
        Some(ResultsVisibleFrom::At { time }) => Some(time),
        _ => None,
    };
    let at_date = literal.is_some();

    ResultsCheckboxes {
        publish_manually: matches!(policy, None | Some(ResultsVisibleFrom::Later)),
        publish_immediately: matches!(policy, Some(ResultsVisibleFrom::Now)),
        at_date,
        at_date_value: literal.map(format_session_date).unwrap_or_default(),
        at_date_time_options: time_of_day_options(literal),
        at_date_disabled: !at_date,
        follows_visibility: matches!(policy, Some(ResultsVisibleFrom::FollowVisible)),
        never: matches!(policy, Some(ResultsVisibleFrom::Never)),
    }
}
