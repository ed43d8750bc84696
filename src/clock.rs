//! Clock utilities
//!
//! Unix-millisecond wall-clock time and ISO-8601 formatting helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current wall-clock time as Unix milliseconds.
pub fn now_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// Formats a Unix-millisecond timestamp as an ISO-8601 string with
/// millisecond precision and a trailing `Z` (e.g. `2023-11-14T22:13:20.000Z`).
pub fn to_iso8601(ms: u64) -> String {
    let dt: DateTime<Utc> =
        DateTime::from_timestamp_millis(ms as i64).unwrap_or_else(|| DateTime::UNIX_EPOCH);
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current wall-clock time as an ISO-8601 string (millisecond precision, `Z`).
pub fn iso_now() -> String {
    to_iso8601(now_ms())
}
