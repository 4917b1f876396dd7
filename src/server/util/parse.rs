use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::error::internal::InternalError;

/// Parses a stored timestamp into UTC
///
/// Accepts RFC 3339 timestamps and naive ISO 8601 timestamps (with or without
/// fractional seconds), which are interpreted as UTC.
///
/// # Arguments
/// - `value` - The timestamp string to parse
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed timestamp
/// - `Err(InternalError::InvalidTimestamp)` - Value matches neither format
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, InternalError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| InternalError::InvalidTimestamp {
            value: value.to_string(),
        })
}
