//! Minute-resolution time helpers and meeting-time parsing.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::AccessCodeError;

const SECS_PER_MINUTE: i64 = 60;

/// Naive layouts accepted for meeting times without an offset. All are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M",
];

/// Whole minutes since the UNIX epoch, rounding toward negative infinity.
pub fn minutes_since_epoch(t: DateTime<Utc>) -> i64 {
    t.timestamp().div_euclid(SECS_PER_MINUTE)
}

/// Start of the given epoch minute, or `None` outside chrono's range.
pub fn minute_start(minute: i64) -> Option<DateTime<Utc>> {
    minute
        .checked_mul(SECS_PER_MINUTE)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(t: DateTime<Utc>) -> Result<DateTime<Utc>, AccessCodeError> {
    minute_start(minutes_since_epoch(t)).ok_or(AccessCodeError::InvalidMeetingTime)
}

/// `YYYY-MM-DDTHH:MM` in UTC. This rendering is part of the derivation seed.
pub fn canonical_minute(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M").to_string()
}

/// Parse a client-supplied meeting time.
///
/// Accepts RFC 3339 with an offset, ISO-8601 without an offset (UTC assumed,
/// optional trailing `Z`), and `MM/DD/YYYY, hh:mm[:ss] AM` style locale strings.
pub fn parse_meeting_time(input: &str) -> Result<DateTime<Utc>, AccessCodeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AccessCodeError::InvalidMeetingTime);
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Ok(t.with_timezone(&Utc));
    }

    let naive = input.strip_suffix('Z').unwrap_or(input);
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|t| t.and_utc())
        .ok_or(AccessCodeError::InvalidMeetingTime)
}
