//! Coercions between form values and wire values.
//!
//! The backend DTOs want numbers for dropdown ids, ISO timestamps for dates,
//! and a single comma-joined string for checklist ids; the forms hold
//! everything as strings. These helpers are the one place that conversion
//! happens.

use chrono::NaiveDate;

use crate::types::RefId;

/// Canonical day-string format used across all sections.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a form or server date into a `NaiveDate`.
///
/// Server timestamps arrive as ISO strings (`2026-01-06T00:00:00`); only the
/// day part is meaningful to the forms, so anything after `T` is dropped.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.split('T').next().unwrap_or(raw).trim();
    NaiveDate::parse_from_str(day, DAY_FORMAT).ok()
}

/// Normalize a date string to the canonical `YYYY-MM-DD` form.
///
/// Returns `None` for empty or unparseable input rather than sending garbage
/// to the backend.
pub fn day_string(raw: &str) -> Option<String> {
    parse_day(raw).map(|d| d.format(DAY_FORMAT).to_string())
}

/// Render a day as a midnight ISO timestamp, the shape the section upsert
/// endpoints expect for date fields.
pub fn iso_midnight(raw: &str) -> Option<String> {
    parse_day(raw).map(|d| format!("{}T00:00:00", d.format(DAY_FORMAT)))
}

/// Coerce a form string to an optional number: empty means "send null".
pub fn opt_num(raw: &str) -> Option<RefId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Coerce a form string to a number, defaulting to zero. Matches the
/// backend's convention for "not selected" dropdown ids.
pub fn num_or_zero(raw: &str) -> RefId {
    opt_num(raw).unwrap_or(0)
}

/// Join checklist ids into the comma-separated string the workflow
/// endpoints carry.
pub fn join_ids(ids: &[RefId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a comma-joined id string back into ids, skipping blanks and
/// unparseable fragments.
pub fn split_ids(raw: &str) -> Vec<RefId> {
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                None
            } else {
                part.parse().ok()
            }
        })
        .collect()
}
