//! View models exposed to template rendering and JSON transport
//!
//! All structures here are plain data: built once per assembly call,
//! serializable, no behavior beyond small invariant helpers.

use coursedeck_util::CourseId;
use serde::{Deserialize, Serialize};

use crate::SessionWindow;

/// One entry of a dropdown or option group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            selected,
            disabled: false,
        }
    }

    /// A disabled, pre-selected placeholder with an empty value
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            selected: true,
            disabled: true,
        }
    }
}

/// One row of the sessions table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRow {
    pub course_id: CourseId,
    pub name: String,
    pub status: SessionWindow,
    pub status_label: String,
    /// Worth the cost of computing extra statistics
    pub recent: bool,
    /// Flash marker for a just-created or just-edited row
    pub highlight: bool,
    /// Opaque blob from the external action collaborator; Null when the
    /// collaborator failed for this row
    #[serde(default)]
    pub actions: serde_json::Value,
}

/// The sessions table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionListing {
    pub rows: Vec<SessionRow>,
}

/// The cross-course "copy from" listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyFromListing {
    /// Sessions in courses where the instructor may modify sessions
    pub rows: Vec<SessionRow>,
    /// Name of the session whose values seed the copy, empty when none
    pub source_session_name: String,
    pub course_options: Vec<SelectOption>,
}

/// Checkbox group for session visibility policy.
/// Exactly one of the three states is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityCheckboxes {
    pub at_open: bool,
    pub at_date: bool,
    pub at_date_value: String,
    pub at_date_time_options: Vec<SelectOption>,
    pub at_date_disabled: bool,
    pub never: bool,
}

impl VisibilityCheckboxes {
    pub fn exactly_one_checked(&self) -> bool {
        u8::from(self.at_open) + u8::from(self.at_date) + u8::from(self.never) == 1
    }
}

/// Checkbox group for results-publication policy.
/// Exactly one of the five states is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsCheckboxes {
    pub publish_manually: bool,
    pub publish_immediately: bool,
    pub at_date: bool,
    pub at_date_value: String,
    pub at_date_time_options: Vec<SelectOption>,
    pub at_date_disabled: bool,
    pub follows_visibility: bool,
    pub never: bool,
}

impl ResultsCheckboxes {
    pub fn exactly_one_checked(&self) -> bool {
        u8::from(self.publish_manually)
            + u8::from(self.publish_immediately)
            + u8::from(self.at_date)
            + u8::from(self.follows_visibility)
            + u8::from(self.never)
            == 1
    }
}

/// Resolved state of the new-session form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSessionForm {
    pub course_options: Vec<SelectOption>,
    /// Default course for the new session, if one was supplied
    pub course_id: Option<CourseId>,
    pub session_name: String,
    pub session_type_options: Vec<SelectOption>,
    pub instructions: String,
    pub start_date: String,
    pub start_time_options: Vec<SelectOption>,
    pub end_date: String,
    pub end_time_options: Vec<SelectOption>,
    pub grace_period_options: Vec<SelectOption>,
    pub timezone_options: Vec<SelectOption>,
    pub visibility: VisibilityCheckboxes,
    pub results: ResultsCheckboxes,
    pub submit_disabled: bool,
}

/// Everything one dashboard request renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub form: NewSessionForm,
    pub listing: SessionListing,
    pub copy_from: CopyFromListing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_option_shape() {
        let option = SelectOption::placeholder("No active courses!");
        assert_eq!(option.label, "No active courses!");
        assert_eq!(option.value, "");
        assert!(option.selected);
        assert!(option.disabled);
    }

    #[test]
    fn visibility_checkbox_invariant() {
        let mut boxes = VisibilityCheckboxes {
            at_open: true,
            at_date: false,
            at_date_value: String::new(),
            at_date_time_options: vec![],
            at_date_disabled: true,
            never: false,
        };
        assert!(boxes.exactly_one_checked());

        boxes.never = true;
        assert!(!boxes.exactly_one_checked());

        boxes.at_open = false;
        assert!(boxes.exactly_one_checked());
    }

    #[test]
    fn results_checkbox_invariant() {
        let mut boxes = ResultsCheckboxes {
            publish_manually: true,
            publish_immediately: false,
            at_date: false,
            at_date_value: String::new(),
            at_date_time_options: vec![],
            at_date_disabled: true,
            follows_visibility: false,
            never: false,
        };
        assert!(boxes.exactly_one_checked());

        boxes.publish_manually = false;
        assert!(!boxes.exactly_one_checked());
    }

    #[test]
    fn session_row_serializes() {
        let row = SessionRow {
            course_id: CourseId::new("cs1101"),
            name: "Midterm feedback".into(),
            status: SessionWindow::Open,
            status_label: "Open".into(),
            recent: true,
            highlight: false,
            actions: serde_json::Value::Null,
        };

        let json = serde_json::to_string(&row).unwrap();
        let parsed: SessionRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, parsed);
    }
}
