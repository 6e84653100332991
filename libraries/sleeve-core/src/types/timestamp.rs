//! Local-input timestamp codec
//!
//! Datetime widgets exchange `YYYY-MM-DDTHH:MM` strings in the viewer's
//! zone; the service stores UTC instants. Conversion is generic over the
//! zone so tests can pin a fixed offset.

use crate::error::{Result, SleeveError};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::fmt;

/// Format of datetime-local widget values
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format used by read-only admin tables
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render a stored instant as a widget value in `tz`
pub fn to_local_input<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(LOCAL_INPUT_FORMAT).to_string()
}

/// Parse a widget value in `tz` back into a stored instant
///
/// An empty value is `None`. A value that does not parse, or that names a
/// local time skipped by a zone transition, is an error; nothing is sent
/// to the service in that case.
pub fn from_local_input<Tz>(raw: &str, tz: &Tz) -> Result<Option<DateTime<Utc>>>
where
    Tz: TimeZone,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let naive = NaiveDateTime::parse_from_str(raw, LOCAL_INPUT_FORMAT)
        .map_err(|_| SleeveError::invalid_timestamp(raw))?;
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| SleeveError::invalid_timestamp(raw))?;
    Ok(Some(local.with_timezone(&Utc)))
}

/// Render a stored instant for read-only tables
pub fn to_display<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}
