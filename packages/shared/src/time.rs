//! Wall-clock helpers.
//!
//! Chat timestamps are local wall-clock date-times with second precision,
//! rendered as `%Y-%m-%d %H:%M:%S` both on screen and in storage.

use chrono::{Local, NaiveDateTime, SubsecRound};

/// Format used for every persisted or displayed chat timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used for the short clock shown next to live messages
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Get the current local wall-clock time, truncated to whole seconds
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Render a date-time with [`TIMESTAMP_FORMAT`]
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a string written by [`format_timestamp`]
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}
