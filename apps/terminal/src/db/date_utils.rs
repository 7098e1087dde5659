//! Timestamp helpers for stored history rows.

use crate::db::error::DbError;
use chrono::{DateTime, Local, Utc};

/// Parse an RFC 3339 timestamp read back from the database.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::InvalidData(format!("bad timestamp {value:?}: {e}")))
}

/// Format a timestamp for the scoreboard, in local time.
pub fn format_local(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
