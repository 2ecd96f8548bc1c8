//! Per-section records, rule sets, and wire payloads.
//!
//! Each onboarding section is an independently fetched and saved record;
//! saving one has no atomicity relationship with another. Every module here
//! follows the same contract: a form struct holding the editable state, a
//! `rules()` set fed to [`crate::validation::evaluate`], and a `payload()`
//! that produces the exact wire shape the backend upsert expects.
//!
//! All payloads carry `createdBy`/`updatedBy` from an explicit [`ActingUser`]
//! passed in by the caller; there is no ambient current-user state.

pub mod address;
pub mod agreement;
pub mod bank;
pub mod basic_info;
pub mod category;
pub mod documents;
pub mod family;
pub mod previous_employer;
pub mod qualification;
pub mod salary;

use serde::Serialize;
use serde_json::Value;

use crate::types::RefId;
use crate::validation::{evaluate, FieldRule, ValidationResult};

// ---------------------------------------------------------------------------
// Shared field formats
// ---------------------------------------------------------------------------

/// Indian mobile number: ten digits starting 6-9.
pub const PHONE_PATTERN: &str = r"^[6-9]\d{9}$";

/// Aadhaar number: exactly twelve digits.
pub const AADHAAR_PATTERN: &str = r"^[0-9]{12}$";

/// PAN card number, e.g. `ABCDE1234F`.
pub const PAN_PATTERN: &str = r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$";

/// Postal PIN code: six digits, no leading zero.
pub const PIN_PATTERN: &str = r"^[1-9][0-9]{5}$";

/// Four-digit year.
pub const YEAR_PATTERN: &str = r"^[0-9]{4}$";

// ---------------------------------------------------------------------------
// Acting user
// ---------------------------------------------------------------------------

/// The identity every payload is stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser {
    pub employee_id: RefId,
}

impl ActingUser {
    pub fn new(employee_id: RefId) -> Self {
        Self { employee_id }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Serialize a form and run a rule set over it.
fn validate_record<T: Serialize>(rules: &[FieldRule], record: &T) -> ValidationResult {
    let value = serde_json::to_value(record).unwrap_or(Value::Null);
    evaluate(rules, &value)
}

/// Coerce a server value to a form string: strings pass through, numbers are
/// rendered (zero means "not selected" and becomes empty), everything else
/// becomes empty. Saved records hold dropdown ids as numbers while the forms
/// hold them as strings.
fn form_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if n.as_f64() == Some(0.0) {
                String::new()
            } else {
                n.to_string()
            }
        }
        _ => String::new(),
    }
}

/// Like [`form_field`] but drops the time part of ISO timestamps, since the
/// forms hold plain day strings.
fn form_day(value: Option<&Value>) -> String {
    let raw = form_field(value);
    raw.split('T').next().unwrap_or("").to_string()
}

fn form_bool(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}
