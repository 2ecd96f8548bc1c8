//! Declarative field validation.
//!
//! Every section expresses its mandatory-field and format requirements as a
//! list of [`FieldRule`]s evaluated uniformly over the serialized record.
//! Conditional requirements ("personal bank details are mandatory only when
//! the salary-below-threshold flag is set") attach a [`Condition`] to the
//! rule instead of being re-implemented ad hoc per form.

mod evaluator;
mod rules;

pub use evaluator::evaluate;
pub use rules::{Condition, FieldRule, FieldViolation, RuleKind, ValidationResult};
