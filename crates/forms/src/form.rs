//! Generic section form binding: record plus touched and error state.

use std::collections::BTreeSet;

use onboard_core::validation::{FieldViolation, ValidationResult};

/// An editable section record with the touched/error bookkeeping the
/// display layer needs. Errors are only reported for touched fields until
/// a submit attempt touches everything.
#[derive(Debug, Clone, Default)]
pub struct SectionForm<T> {
    record: T,
    touched: BTreeSet<String>,
    submit_attempted: bool,
    errors: Vec<FieldViolation>,
}

impl<T> SectionForm<T> {
    pub fn new(record: T) -> Self {
        Self {
            record,
            touched: BTreeSet::new(),
            submit_attempted: false,
            errors: Vec::new(),
        }
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    /// Mutable access to the record; the caller marks the edited field as
    /// touched.
    pub fn edit(&mut self, field: &str, f: impl FnOnce(&mut T)) {
        f(&mut self.record);
        self.touched.insert(field.to_string());
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.submit_attempted || self.touched.contains(field)
    }

    /// Store a validation outcome. A submit attempt reveals errors on
    /// untouched fields too.
    pub fn set_validation(&mut self, result: &ValidationResult, submit: bool) {
        self.submit_attempted |= submit;
        self.errors = result.errors.clone();
    }

    /// Violations currently visible for a field.
    pub fn visible_errors(&self, field: &str) -> Vec<&FieldViolation> {
        if !self.is_touched(field) {
            return Vec::new();
        }
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
