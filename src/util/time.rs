//! Timestamp parsing and relative-time display.
//!
//! DESIGN
//! ======
//! The backend emits naive local ISO 8601 timestamps. Display buckets are
//! fixed: under a minute reads "Just now", then minutes, hours, and days,
//! and anything a week or older falls back to a short absolute date.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, NaiveDateTime};

/// Parse a backend timestamp.
///
/// Accepts naive ISO 8601 (`2026-08-06T08:30:00.123456`) as the backend
/// emits, plus RFC 3339 with an offset, normalized to browser-local time.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Bucket a timestamp relative to `now`.
///
/// `< 1 min` → "Just now"; `< 60 min` → "N min(s) ago"; `< 24 h` →
/// "N hour(s) ago"; `< 7 days` → "N day(s) ago"; otherwise a short absolute
/// date ("Aug 6, 08:30 AM"). Future timestamps read "Just now".
#[must_use]
pub fn format_relative(ts: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff = now.signed_duration_since(ts);
    let mins = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if mins < 1 {
        "Just now".to_owned()
    } else if mins < 60 {
        format!("{mins} min{} ago", plural(mins))
    } else if hours < 24 {
        format!("{hours} hour{} ago", plural(hours))
    } else if days < 7 {
        format!("{days} day{} ago", plural(days))
    } else {
        ts.format("%b %-d, %I:%M %p").to_string()
    }
}

/// Render a raw backend timestamp against the current wall clock.
///
/// Unparseable or absent values render as an empty label.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(String::new, |ts| format_relative(ts, Local::now().naive_local()))
}

fn plural(n: i64) -> &'static str {
    if n > 1 { "s" } else { "" }
}
