//! Bounded admission of sessions for statistics computation
//!
//! Closed sessions are cheap to list but expensive to compute statistics
//! for, so only a bounded number of the most recently created ones are
//! flagged. Currently-active sessions are never throttled.

use chrono::{DateTime, Utc};
use coursedeck_api::{FeedbackSession, SessionWindow};
use coursedeck_config::DashboardConfig;
use coursedeck_util::is_older_than_days;

use crate::classify;

/// Compute the "recent" flag for each session in one greedy left-to-right
/// pass.
///
/// Precondition: `sessions` is ordered by `created_at` descending. The
/// "most recent first" guarantee degrades to "first K in list order" for
/// unsorted input; the order is not re-validated here.
///
/// Open or waiting-to-open sessions are always flagged and never consume
/// budget. A closed session is flagged only while fewer than
/// `max_closed_session_stats` closed sessions have been granted and its
/// creation lies within the recency window.
pub fn flag_recent_sessions(
    sessions: &[FeedbackSession],
    now: DateTime<Utc>,
    config: &DashboardConfig,
) -> Vec<bool> {
    let mut granted = 0usize;

    sessions
        .iter()
        .map(|session| {
            let c = classify(session, now);
            if c.is_open || c.window == SessionWindow::WaitingToOpen {
                true
            } else if granted < config.max_closed_session_stats
                && !is_older_than_days(session.created_at, now, config.recent_window_days)
            {
                granted += 1;
                true
            } else {
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use coursedeck_util::CourseId;

    fn at(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
    }

    fn closed_session(name: &str, created_at: DateTime<Utc>) -> FeedbackSession {
        FeedbackSession {
            course_id: CourseId::new("cs1101"),
            name: name.into(),
            created_at,
            opens_at: at(2024, 1, 1),
            closes_at: at(2024, 1, 5),
            visible_from: None,
            results_visible_from: None,
            grace_period_minutes: None,
            timezone_offset: None,
            instructions: None,
        }
    }

    fn open_session(name: &str) -> FeedbackSession {
        FeedbackSession {
            opens_at: at(2024, 1, 9),
            closes_at: at(2024, 1, 20),
            ..closed_session(name, at(2024, 1, 8))
        }
    }

    #[test]
    fn open_sessions_always_recent() {
        let now = at(2024, 1, 10);
        // More open sessions than the closed-session budget
        let sessions: Vec<_> = (0..8).map(|i| open_session(&format!("s{i}"))).collect();

        let flags = flag_recent_sessions(&sessions, now, &DashboardConfig::default());
        assert!(flags.iter().all(|&f| f));
    }

    #[test]
    fn closed_budget_caps_at_five() {
        let now = at(2024, 1, 10);
        // Six closed sessions, all younger than a year, descending creation
        let sessions: Vec<_> = (0..6)
            .map(|i| closed_session(&format!("s{i}"), at(2023, 12, 20 - i)))
            .collect();

        let flags = flag_recent_sessions(&sessions, now, &DashboardConfig::default());
        assert_eq!(flags, vec![true, true, true, true, true, false]);
    }

    #[test]
    fn open_sessions_do_not_consume_budget() {
        let now = at(2024, 1, 10);
        let mut sessions = vec![open_session("open-1"), open_session("open-2")];
        for i in 0..5 {
            sessions.push(closed_session(&format!("closed-{i}"), at(2023, 12, 20 - i)));
        }

        let flags = flag_recent_sessions(&sessions, now, &DashboardConfig::default());
        // All five closed sessions still fit the budget
        assert!(flags.iter().all(|&f| f));
    }

    #[test]
    fn stale_closed_sessions_not_flagged() {
        let now = at(2024, 1, 10);
        let sessions = vec![closed_session("old", at(2022, 6, 1))];

        let flags = flag_recent_sessions(&sessions, now, &DashboardConfig::default());
        assert_eq!(flags, vec![false]);
    }

    #[test]
    fn exactly_one_year_old_is_still_recent() {
        // Created exactly 365 days before now: the boundary is eligible
        let now = at(2024, 1, 10);
        let boundary = now - chrono::Duration::days(365);
        let sessions = vec![closed_session("boundary", boundary)];

        let flags = flag_recent_sessions(&sessions, now, &DashboardConfig::default());
        assert_eq!(flags, vec![true]);

        // One second older misses the window
        let sessions = vec![closed_session(
            "past-boundary",
            boundary - chrono::Duration::seconds(1),
        )];
        let flags = flag_recent_sessions(&sessions, now, &DashboardConfig::default());
        assert_eq!(flags, vec![false]);
    }

    #[test]
    fn stale_session_does_not_consume_budget() {
        let now = at(2024, 1, 10);
        let mut sessions = vec![closed_session("old", at(2022, 6, 1))];
        for i in 0..5 {
            sessions.push(closed_session(&format!("young-{i}"), at(2023, 12, 20 - i)));
        }

        let flags = flag_recent_sessions(&sessions, now, &DashboardConfig::default());
        assert_eq!(flags, vec![false, true, true, true, true, true]);
    }

    #[test]
    fn zero_ceiling_never_flags_closed_sessions() {
        let now = at(2024, 1, 10);
        let config = DashboardConfig {
            max_closed_session_stats: 0,
            ..Default::default()
        };
        let sessions = vec![
            open_session("open"),
            closed_session("closed", at(2023, 12, 20)),
        ];

        let flags = flag_recent_sessions(&sessions, now, &config);
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let flags = flag_recent_sessions(&[], at(2024, 1, 10), &DashboardConfig::default());
        assert!(flags.is_empty());
    }
}
