//! Rule evaluation over serialized records.

use regex::Regex;
use serde_json::Value;

use super::rules::{Condition, FieldRule, FieldViolation, RuleKind, ValidationResult};

/// Evaluate a rule set against a serialized record.
///
/// Rules whose condition does not hold are skipped entirely. Format rules
/// (`Pattern`, `Email`) pass on absent or empty values so that optional
/// fields stay optional; pair them with a `Required` rule on the same field
/// when presence is also mandatory.
pub fn evaluate(rules: &[FieldRule], record: &Value) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for rule in rules {
        if let Some(condition) = &rule.when {
            if !condition_holds(condition, record) {
                continue;
            }
        }

        let value = lookup_path(record, &rule.field);
        if let Some(violation) = check(rule, value) {
            result.errors.push(violation);
        }
    }

    result.is_valid = result.errors.is_empty();
    result
}

fn check(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    let failed = match &rule.kind {
        RuleKind::Required => is_absent(value),
        RuleKind::Pattern(regex) => match string_of(value) {
            Some(s) if !s.is_empty() => match Regex::new(regex) {
                Ok(re) => !re.is_match(s),
                // A malformed pattern is a programming error in the rule
                // table; fail the field rather than silently pass it.
                Err(_) => true,
            },
            _ => false,
        },
        RuleKind::Email => match string_of(value) {
            Some(s) if !s.is_empty() => !looks_like_email(s),
            _ => false,
        },
        RuleKind::Numeric => match value {
            None | Some(Value::Null) => false,
            Some(Value::Number(_)) => false,
            Some(Value::String(s)) => {
                !s.trim().is_empty() && s.trim().parse::<f64>().is_err()
            }
            Some(_) => true,
        },
        RuleKind::PositiveNumber => match numeric_of(value) {
            Some(n) => n <= 0.0,
            None => !is_absent(value),
        },
    };

    failed.then(|| FieldViolation {
        field: rule.field.clone(),
        message: rule.message.clone(),
        value: value.cloned(),
    })
}

fn condition_holds(condition: &Condition, record: &Value) -> bool {
    match condition {
        Condition::Equals { field, value } => {
            lookup_path(record, field).map_or(value.is_null(), |v| values_equal(v, value))
        }
        Condition::NotEquals { field, value } => {
            lookup_path(record, field).map_or(!value.is_null(), |v| !values_equal(v, value))
        }
    }
}

/// Loose equality between a record value and a condition value: numbers
/// compare numerically even when one side is a string, which is how form
/// state holds dropdown ids.
fn values_equal(left: &Value, right: &Value) -> bool {
    if left == right {
        return true;
    }
    match (numeric_of(Some(left)), numeric_of(Some(right))) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Walk a dotted path (`personalAccount.accountNo`) into a JSON object tree.
fn lookup_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

fn string_of(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) => Some(s.trim()),
        _ => None,
    }
}

fn numeric_of(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Minimal email shape check: something before `@`, a domain with a dot,
/// no whitespace.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.chars().any(char::is_whitespace)
}
