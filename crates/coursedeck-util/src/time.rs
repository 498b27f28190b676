//! Time helpers for session display and classification
//!
//! Session timestamps are stored in UTC; the per-session timezone offset is
//! display data handled by the option builders, not a chrono `TimeZone`.

use chrono::{DateTime, Duration, Timelike, Utc};

/// Fixed display format for session dates, e.g. "Mon, 01 Jan, 2024"
pub const SESSION_DATE_FORMAT: &str = "%a, %d %b, %Y";

/// Fixed display format for session times of day, e.g. "14:30"
pub const SESSION_TIME_FORMAT: &str = "%H:%M";

/// Format a timestamp for the form's date fields.
pub fn format_session_date(dt: DateTime<Utc>) -> String {
    dt.format(SESSION_DATE_FORMAT).to_string()
}

/// Format a timestamp for time-of-day display.
pub fn format_session_time(dt: DateTime<Utc>) -> String {
    dt.format(SESSION_TIME_FORMAT).to_string()
}

/// The default start time offered for a new session: the next full hour
/// strictly after `now`.
pub fn next_full_hour(now: DateTime<Utc>) -> DateTime<Utc> {
    let later = now + Duration::hours(1);
    later
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(later)
}

/// Snap a timestamp down to its half-hour slot (minute 0 or 30, seconds
/// zeroed). Used to match a session time against the fixed time-of-day
/// option enumeration.
pub fn truncate_to_slot(dt: DateTime<Utc>) -> DateTime<Utc> {
    let minute = if dt.minute() < 30 { 0 } else { 30 };
    dt.with_minute(minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Whether `t` falls strictly before `now - days`. A timestamp exactly
/// `days` old is NOT considered older.
pub fn is_older_than_days(t: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    t < now - Duration::days(days)
}
