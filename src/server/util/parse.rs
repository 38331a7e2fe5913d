use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::server::error::AppError;

/// Parses a record ID taken from a query string, form field or JSON body.
///
/// # Arguments
/// - `value` - Raw ID value, if the client sent one
/// - `missing` - Message returned when no ID was sent
/// - `not_found` - Message returned when the ID cannot name any record
///
/// # Returns
/// - `Ok(i32)` - Parsed ID
/// - `Err(AppError::BadRequest)` - ID absent or blank
/// - `Err(AppError::NotFound)` - ID is not a valid integer, so no record can match it
pub fn parse_id(value: Option<&str>, missing: &str, not_found: &str) -> Result<i32, AppError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(missing.to_string()))?;

    value
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}

/// Parses an event date sent by a form.
///
/// Accepts RFC 3339 timestamps, `datetime-local` input values (`2026-01-01T18:30`, with
/// optional seconds) and plain dates (`2026-01-01`). Values without an offset are taken
/// as UTC and plain dates as midnight UTC.
pub fn parse_event_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(date.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid date '{}'", value)))
}

/// Query flags are only set by the literal string `true`.
pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Parses a result limit; zero, negative and non-numeric values mean no limit.
pub fn parse_limit(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|limit| *limit > 0)
        .map(|limit| limit as u64)
}
