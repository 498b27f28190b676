//! Time-window classification for feedback sessions
//!
//! Pure functions from a session's time fields plus "now" to its temporal
//! display state. No I/O, no side effects; deterministic for a given `now`.

use chrono::{DateTime, Utc};
use coursedeck_api::{
    FeedbackSession, ResultsVisibility, ResultsVisibleFrom, SessionVisibleFrom, SessionWindow,
    TimeFieldAnomaly,
};

/// Full temporal classification of one session at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub window: SessionWindow,
    /// `now` lies within [opens_at, closes_at]
    pub is_open: bool,
    /// The session's visibility window has started. A session may be open
    /// by date math yet not visible; callers must enforce the conjunction.
    pub is_visible: bool,
    pub results: ResultsVisibility,
    pub results_visible_now: bool,
    /// Data-integrity defect, if any; the caller decides what to log
    pub anomaly: Option<TimeFieldAnomaly>,
}

/// Classify a session's display state at `now`.
pub fn classify(session: &FeedbackSession, now: DateTime<Utc>) -> Classification {
    let visibility = session.visibility_policy();
    let results_policy = session.results_policy();
    let results = resolve_results(results_policy);

    // An inverted window violates the opens_at <= closes_at invariant.
    // Classify conservatively rather than crash: closed, not visible,
    // results hidden.
    if session.closes_at < session.opens_at {
        return Classification {
            window: SessionWindow::Closed,
            is_open: false,
            is_visible: false,
            results,
            results_visible_now: false,
            anomaly: Some(TimeFieldAnomaly::InvertedWindow),
        };
    }

    let window = if now < session.opens_at {
        SessionWindow::WaitingToOpen
    } else if now <= session.closes_at {
        SessionWindow::Open
    } else {
        SessionWindow::Closed
    };

    let is_visible = match visibility {
        SessionVisibleFrom::AtOpening => now >= session.opens_at,
        SessionVisibleFrom::Never => false,
        SessionVisibleFrom::At { time } => now >= time,
    };

    // A literal results timestamp on a never-visible session could surface
    // results before the session itself exists for respondents. Keep them
    // hidden and report the defect.
    let anomaly = match (visibility, results_policy) {
        (SessionVisibleFrom::Never, ResultsVisibleFrom::At { .. }) => {
            Some(TimeFieldAnomaly::ResultsWithoutVisibility)
        }
        _ => None,
    };

    let results_visible_now = match results {
        ResultsVisibility::FollowsSessionVisibility => is_visible,
        ResultsVisibility::AwaitingManualPublish => false,
        ResultsVisibility::Published => true,
        ResultsVisibility::Never => false,
        ResultsVisibility::FromTimestamp { time } => anomaly.is_none() && now >= time,
    };

    Classification {
        window,
        is_open: window == SessionWindow::Open,
        is_visible,
        results,
        results_visible_now,
        anomaly,
    }
}

fn resolve_results(policy: ResultsVisibleFrom) -> ResultsVisibility {
    match policy {
        ResultsVisibleFrom::FollowVisible => ResultsVisibility::FollowsSessionVisibility,
        ResultsVisibleFrom::Later => ResultsVisibility::AwaitingManualPublish,
        ResultsVisibleFrom::Now => ResultsVisibility::Published,
        ResultsVisibleFrom::Never => ResultsVisibility::Never,
        ResultsVisibleFrom::At { time } => ResultsVisibility::FromTimestamp { time },
    }
}
