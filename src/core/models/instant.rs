//! Conversions between absolute instants and regional wall-clock time
//!
//! All business rules run against local wall-clock values
//! (`NaiveDateTime` under [`REGION_OFFSET`]). Instants cross the boundary as
//! `DateTime<Utc>` and are rendered as `YYYY-MM-DDTHH:mm:ss.sssZ`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

use super::working_hours::REGION_OFFSET;

/// Errors that can occur when parsing an instant
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInstantError {
    /// Input was empty
    #[error("empty date")]
    Empty,

    /// Input did not carry a `Z` suffix where one is required
    #[error("date must be in UTC with a 'Z' suffix: {0}")]
    MissingUtcSuffix(String),

    /// Input is not RFC 3339 with an explicit offset
    #[error("invalid ISO 8601 date with offset: {0}")]
    Invalid(String),
}

/// Regional wall-clock time of an instant
#[must_use]
pub fn to_local(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&REGION_OFFSET).naive_local()
}

/// Absolute instant of a regional wall-clock time
///
/// Returns `None` only when the result falls outside chrono's range.
#[must_use]
pub fn from_local(local: NaiveDateTime) -> Option<DateTime<Utc>> {
    REGION_OFFSET
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render an instant as UTC with millisecond precision
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 instant carrying an explicit offset or `Z`
///
/// With `require_utc_suffix` only `Z`-terminated input is accepted.
pub fn parse_instant(input: &str, require_utc_suffix: bool) -> Result<DateTime<Utc>, ParseInstantError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseInstantError::Empty);
    }
    if require_utc_suffix && !input.ends_with('Z') {
        return Err(ParseInstantError::MissingUtcSuffix(input.to_string()));
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ParseInstantError::Invalid(input.to_string()))
}
