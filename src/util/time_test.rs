use super::*;
use chrono::{Duration, NaiveDate};

fn base_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_naive_iso_with_microseconds() {
    let ts = parse_timestamp("2026-08-06T08:30:00.123456").unwrap();
    assert_eq!(ts.format("%H:%M:%S").to_string(), "08:30:00");
}

#[test]
fn parses_naive_iso_without_fraction() {
    assert!(parse_timestamp("2026-08-06T08:30:00").is_some());
}

#[test]
fn rejects_garbage() {
    assert_eq!(parse_timestamp("not-a-date"), None);
    assert_eq!(parse_timestamp(""), None);
}

// =============================================================
// Relative buckets
// =============================================================

#[test]
fn thirty_seconds_ago_is_just_now() {
    let now = base_now();
    assert_eq!(format_relative(now - Duration::seconds(30), now), "Just now");
}

#[test]
fn future_timestamp_is_just_now() {
    let now = base_now();
    assert_eq!(format_relative(now + Duration::minutes(5), now), "Just now");
}

#[test]
fn one_minute_is_singular() {
    let now = base_now();
    assert_eq!(format_relative(now - Duration::seconds(90), now), "1 min ago");
}

#[test]
fn five_minutes_ago_pluralizes() {
    let now = base_now();
    assert_eq!(format_relative(now - Duration::minutes(5), now), "5 mins ago");
}

#[test]
fn fifty_nine_minutes_stays_in_minutes() {
    let now = base_now();
    assert_eq!(format_relative(now - Duration::minutes(59), now), "59 mins ago");
}

#[test]
fn two_hours_ago() {
    let now = base_now();
    assert_eq!(format_relative(now - Duration::hours(2), now), "2 hours ago");
}

#[test]
fn one_hour_is_singular() {
    let now = base_now();
    assert_eq!(format_relative(now - Duration::minutes(61), now), "1 hour ago");
}

#[test]
fn three_days_ago() {
    let now = base_now();
    assert_eq!(format_relative(now - Duration::days(3), now), "3 days ago");
}

#[test]
fn ten_days_ago_falls_back_to_absolute_date() {
    let now = base_now();
    let rendered = format_relative(now - Duration::days(10), now);
    assert_eq!(rendered, "Jul 27, 12:00 PM");
}

#[test]
fn absolute_fallback_uses_twelve_hour_clock() {
    let now = base_now();
    let ts = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap().and_hms_opt(8, 5, 0).unwrap();
    assert_eq!(format_relative(ts, now), "Jul 1, 08:05 AM");
}

// =============================================================
// Raw wrapper
// =============================================================

#[test]
fn format_timestamp_renders_unparseable_as_empty() {
    assert_eq!(format_timestamp("garbage"), "");
}
