//! Date utilities: calendar-day boundaries and reset timestamp parsing.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::settings::RESET_TIMESTAMP_FORMAT;

/// Local midnight that starts the calendar day containing `now`.
pub fn midnight_of(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// Parse a persisted `last_reset` value.
///
/// Accepts the canonical `YYYY-MM-DDTHH:MM:SS` form plus the usual ISO 8601
/// relatives (fractional seconds, space separator, bare date, RFC 3339 with
/// an offset, which is converted to local time). Empty or unparseable input
/// yields `None`, i.e. "never reset".
pub fn parse_reset_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in [
        RESET_TIMESTAMP_FORMAT,
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}
