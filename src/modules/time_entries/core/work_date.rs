// Calendar date handling for stored entries.
//
// Stored and submitted dates use the canonical `dd-MM-yyyy` form. Rows written by
// older clients may carry ISO `yyyy-MM-dd`, so work date derivation accepts both,
// while validation of new input only accepts the canonical form.

use chrono::NaiveDate;

use crate::modules::time_entries::core::errors::ApplicationError;

pub const CANONICAL_FORMAT: &str = "%d-%m-%Y";
const ISO_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%-d %b (%a)";

/// Parses a date that must already be in canonical form. Non-padded or otherwise
/// re-formattable variants are rejected rather than coerced.
pub fn parse_canonical(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, CANONICAL_FORMAT)
        .ok()
        .filter(|date| format_canonical(*date) == raw)
}

/// Parses a stored canonical date, tolerating missing zero padding.
pub fn parse_stored(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), CANONICAL_FORMAT).ok()
}

pub fn derive_work_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, CANONICAL_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_FORMAT))
        .ok()
}

pub fn format_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Label used by the horizon view, e.g. `10 Nov (Mon)`.
pub fn display_label(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn require_canonical(field: &str, raw: &str) -> Result<NaiveDate, ApplicationError> {
    parse_canonical(raw.trim()).ok_or_else(|| {
        ApplicationError::Validation(format!("{field} must be a dd-MM-yyyy date, got '{raw}'"))
    })
}

pub fn require_range(start: NaiveDate, end: NaiveDate) -> Result<(), ApplicationError> {
    if end < start {
        return Err(ApplicationError::Validation(
            "end date must not be before start date".into(),
        ));
    }
    Ok(())
}

/// Parses an inclusive `start_date`/`end_date` pair as received at the boundary.
pub fn parse_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(NaiveDate, NaiveDate), ApplicationError> {
    let start = require_canonical("start_date", start.unwrap_or_default())?;
    let end = require_canonical("end_date", end.unwrap_or_default())?;
    require_range(start, end)?;
    Ok((start, end))
}
