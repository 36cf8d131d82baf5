//! Booking date/time helpers.

use chrono::{DateTime, NaiveDateTime};

/// Formats accepted for a booking's `date_time`, besides RFC 3339.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a booking date/time as sent by clients.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`), and local times with or
/// without seconds (`2024-05-01T10:00`, `2024-05-01 10:00`). The original
/// text is what gets stored; this is only used to reject garbage.
#[must_use]
pub fn parse_booking_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}
