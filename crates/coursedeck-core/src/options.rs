//! Option-list builders for the new-session form
//!
//! Pure generation from inputs plus fixed domain constants; selection is
//! resolved here so templates only render.

use std::collections::HashMap;

use chrono::{DateTime, Timelike, Utc};
use coursedeck_api::{Course, InstructorPrivileges, Privilege, SelectOption, SessionType};
use coursedeck_config::DashboardConfig;
use coursedeck_util::{CourseId, DashboardError, Result, truncate_to_slot};
use tracing::warn;

/// Placeholder label when the instructor can modify sessions in no course
pub const NO_ACTIVE_COURSES_LABEL: &str = "No active courses!";

/// The two selection sources for the course dropdown. Either or both may
/// be absent; a course matching either is selected.
#[derive(Debug, Clone, Default)]
pub struct CourseSelectionHint {
    /// Course of the currently filled form session (re-edit / clone)
    pub filled_form_course: Option<CourseId>,
    /// Default course supplied for a brand-new session
    pub default_course: Option<CourseId>,
}

impl CourseSelectionHint {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn matches(&self, course_id: &CourseId) -> bool {
        self.filled_form_course.as_ref() == Some(course_id)
            || self.default_course.as_ref() == Some(course_id)
    }
}

/// Build the course dropdown: caller order, filtered to courses where the
/// instructor holds the modify-session privilege.
///
/// A course without an instructor record is a configuration error and
/// propagates; permissions are never assumed.
pub fn course_options(
    courses: &[Course],
    instructors: &HashMap<CourseId, InstructorPrivileges>,
    hint: &CourseSelectionHint,
) -> Result<Vec<SelectOption>> {
    let mut result = Vec::new();

    for course in courses {
        let privileges = instructors
            .get(&course.id)
            .ok_or_else(|| DashboardError::missing_privilege(course.id.clone()))?;

        if privileges.is_allowed(Privilege::ModifySession) {
            result.push(SelectOption::new(
                course.id.as_str(),
                course.id.as_str(),
                hint.matches(&course.id),
            ));
        }
    }

    if result.is_empty() {
        result.push(SelectOption::placeholder(NO_ACTIVE_COURSES_LABEL));
    }

    Ok(result)
}

/// Build the two fixed session-type options. Team evaluation is the
/// tie-break default: selected unless Standard is explicitly requested.
pub fn session_type_options(default: Option<SessionType>) -> Vec<SelectOption> {
    vec![
        SelectOption::new(
            "Session with your own questions",
            SessionType::Standard.as_str(),
            default == Some(SessionType::Standard),
        ),
        SelectOption::new(
            "Team peer evaluation session",
            SessionType::TeamEvaluation.as_str(),
            default.is_none() || default == Some(SessionType::TeamEvaluation),
        ),
    ]
}

/// Build all 48 half-hour time-of-day slots. The slot containing the
/// supplied time is selected; no supplied time selects nothing.
pub fn time_of_day_options(selected: Option<DateTime<Utc>>) -> Vec<SelectOption> {
    let selected_slot = selected.map(truncate_to_slot);

    (0..48u32)
        .map(|slot| {
            let hour = slot / 2;
            let minute = (slot % 2) * 30;
            let value = format!("{hour:02}:{minute:02}");
            let is_selected = selected_slot
                .map(|s| s.hour() == hour && s.minute() == minute)
                .unwrap_or(false);
            SelectOption::new(value.clone(), value, is_selected)
        })
        .collect()
}

/// Build the grace-period dropdown from the configured enumeration. The
/// configured default is selected when the session supplies no value; a
/// supplied value outside the enumeration selects nothing.
pub fn grace_period_options(selected: Option<u32>, config: &DashboardConfig) -> Vec<SelectOption> {
    let target = selected.unwrap_or(config.default_grace_period);

    if !config.grace_period_minutes.contains(&target) {
        warn!(
            grace_period = target,
            "Grace period outside the configured enumeration; no option selected"
        );
    }

    config
        .grace_period_minutes
        .iter()
        .map(|&minutes| {
            SelectOption::new(
                format!("{minutes} mins"),
                minutes.to_string(),
                minutes == target,
            )
        })
        .collect()
}

/// Build the timezone dropdown from the configured enumeration. The
/// configured default offset is selected when the session supplies none.
pub fn timezone_options(selected: Option<f64>, config: &DashboardConfig) -> Vec<SelectOption> {
    let target = selected.unwrap_or(config.default_timezone_offset);

    if !config.timezone_offsets.contains(&target) {
        warn!(
            timezone_offset = target,
            "Timezone offset outside the configured enumeration; no option selected"
        );
    }

    config
        .timezone_offsets
        .iter()
        .map(|&offset| SelectOption::new(timezone_label(offset), offset.to_string(), offset == target))
        .collect()
}

fn timezone_label(offset: f64) -> String {
    if offset == 0.0 {
        return "UTC".into();
    }
    let sign = if offset < 0.0 { '-' } else { '+' };
    let total_minutes = (offset.abs() * 60.0).round() as u32;
    format!("UTC {}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}
