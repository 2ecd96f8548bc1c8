//! Validation rule and result types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single declarative rule over one field of a record.
///
/// `field` is a dotted path into the serialized record
/// (e.g. `personalAccount.accountNo`).
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: String,
    pub kind: RuleKind,
    pub message: String,
    /// When present, the rule only fires while the condition holds.
    pub when: Option<Condition>,
}

/// What the rule checks.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Value must be present and non-empty.
    Required,
    /// String value must match the regex (absent/empty values pass; pair
    /// with `Required` to also enforce presence).
    Pattern(String),
    /// String value must look like an email address.
    Email,
    /// Value must be numeric (number, or string parseable as a number).
    Numeric,
    /// Value must be a number greater than zero.
    PositiveNumber,
}

/// A predicate over another field of the same record.
#[derive(Debug, Clone)]
pub enum Condition {
    Equals { field: String, value: Value },
    NotEquals { field: String, value: Value },
}

impl FieldRule {
    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::Required,
            message: message.into(),
            when: None,
        }
    }

    pub fn pattern(
        field: impl Into<String>,
        regex: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::Pattern(regex.into()),
            message: message.into(),
            when: None,
        }
    }

    pub fn email(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::Email,
            message: message.into(),
            when: None,
        }
    }

    pub fn numeric(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::Numeric,
            message: message.into(),
            when: None,
        }
    }

    pub fn positive_number(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: RuleKind::PositiveNumber,
            message: message.into(),
            when: None,
        }
    }

    /// Attach a condition: the rule only applies while the condition holds.
    pub fn when(mut self, condition: Condition) -> Self {
        self.when = Some(condition);
        self
    }
}

impl Condition {
    pub fn equals(field: impl Into<String>, value: Value) -> Self {
        Self::Equals {
            field: field.into(),
            value,
        }
    }

    pub fn not_equals(field: impl Into<String>, value: Value) -> Self {
        Self::NotEquals {
            field: field.into(),
            value,
        }
    }
}

/// Aggregated result of evaluating all rules against one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// A passing result with no violations.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Fold another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.is_valid = self.errors.is_empty();
    }

    /// Record a violation directly (for cross-field checks that do not fit
    /// the single-field rule shape).
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldViolation {
            field: field.into(),
            message: message.into(),
            value: None,
        });
        self.is_valid = false;
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}
