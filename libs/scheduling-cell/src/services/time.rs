use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use regex::Regex;
use std::sync::OnceLock;

use crate::models::SchedulingError;

pub const MINUTES_PER_DAY: i32 = 1440;

fn meridiem_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{1,2}):(\d{2})\s*([AaPp])\.?[Mm]\.?$").expect("valid meridiem regex")
    })
}

fn minute_of_day(time: NaiveTime) -> i32 {
    time.hour() as i32 * 60 + time.minute() as i32
}

/// Parse a time value into minutes since midnight.
///
/// Accepted patterns, tried in order:
/// - `HH:MM` / `HH:MM:SS` (24-hour)
/// - `H:MM AM` / `H:MM p.m.` (12-hour)
/// - naive ISO 8601 date-times, whose literal wall-clock fields are used
/// - RFC 3339 date-times, converted to the local zone first so the
///   returned minute matches the local wall clock (never the UTC fields)
pub fn parse_time(text: &str) -> Result<i32, SchedulingError> {
    let trimmed = text.trim();

    if let Ok(time) = NaiveTime::parse_from_str(trimmed, "%H:%M") {
        return Ok(minute_of_day(time));
    }
    if let Ok(time) = NaiveTime::parse_from_str(trimmed, "%H:%M:%S") {
        return Ok(minute_of_day(time));
    }

    if let Some(caps) = meridiem_pattern().captures(trimmed) {
        let hour: i32 = caps[1]
            .parse()
            .map_err(|_| SchedulingError::TimeFormat(trimmed.to_string()))?;
        let minute: i32 = caps[2]
            .parse()
            .map_err(|_| SchedulingError::TimeFormat(trimmed.to_string()))?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(SchedulingError::TimeFormat(trimmed.to_string()));
        }
        let is_pm = caps[3].eq_ignore_ascii_case("p");
        let hour24 = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        return Ok(hour24 * 60 + minute);
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(minute_of_day(datetime.time()));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Ok(minute_of_day(datetime.time()));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        let local = datetime.with_timezone(&Local);
        return Ok(local.hour() as i32 * 60 + local.minute() as i32);
    }

    Err(SchedulingError::TimeFormat(trimmed.to_string()))
}

/// Format minutes since midnight as a zero-padded 24-hour `HH:MM`.
///
/// A value outside `[0, 1440)` indicates an upstream arithmetic bug and
/// is surfaced, never clamped.
pub fn format_time(minutes: i32) -> Result<String, SchedulingError> {
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        return Err(SchedulingError::MinutesOutOfRange(minutes));
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// Add `delta` minutes to a time string, wrapping at 24 hours.
///
/// Wrap-around is intentional for shift math; callers must guard
/// against crossing into a new calendar day where that matters.
pub fn add_minutes(time_text: &str, delta: i32) -> Result<String, SchedulingError> {
    let minutes = parse_time(time_text)?;
    format_time((minutes + delta).rem_euclid(MINUTES_PER_DAY))
}

/// `YYYY-MM-DD` key for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DD` key derived from a timestamp's local calendar fields.
///
/// Shift lookups are keyed by local weekday/date; a UTC-based key would
/// shift bookings by one day near midnight in non-UTC zones.
pub fn local_date_key<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    date_key(timestamp.with_timezone(&Local).date_naive())
}
