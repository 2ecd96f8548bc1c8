//! Wizard step definitions for the onboarding entry flow.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The nine steps of the onboarding wizard, in entry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Address,
    Bank,
    Category,
    Family,
    Qualification,
    PreviousEmployer,
    Salary,
    Documents,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 9;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 9;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::BasicInfo),
            2 => Ok(Self::Address),
            3 => Ok(Self::Bank),
            4 => Ok(Self::Category),
            5 => Ok(Self::Family),
            6 => Ok(Self::Qualification),
            7 => Ok(Self::PreviousEmployer),
            8 => Ok(Self::Salary),
            9 => Ok(Self::Documents),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Address => 2,
            Self::Bank => 3,
            Self::Category => 4,
            Self::Family => 5,
            Self::Qualification => 6,
            Self::PreviousEmployer => 7,
            Self::Salary => 8,
            Self::Documents => 9,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Address => "Address",
            Self::Bank => "Bank Details",
            Self::Category => "Category",
            Self::Family => "Family",
            Self::Qualification => "Qualifications",
            Self::PreviousEmployer => "Previous Employment",
            Self::Salary => "Salary",
            Self::Documents => "Documents",
        }
    }

    /// URL path segment for the step.
    pub fn slug(self) -> &'static str {
        match self {
            Self::BasicInfo => "basic-info",
            Self::Address => "address",
            Self::Bank => "bank",
            Self::Category => "category",
            Self::Family => "family",
            Self::Qualification => "qualification",
            Self::PreviousEmployer => "previous-employer",
            Self::Salary => "salary",
            Self::Documents => "documents",
        }
    }

    /// Path segment of the section-upsert endpoint (`/employee/tab/{...}`).
    pub fn tab_slug(self) -> &'static str {
        match self {
            Self::BasicInfo => "basic-info",
            Self::Address => "address-info",
            Self::Bank => "bank-info",
            Self::Category => "category-info",
            Self::Family => "family-info",
            Self::Qualification => "qualification",
            Self::PreviousEmployer => "previous-employer",
            Self::Salary => "salary-info",
            Self::Documents => "documents",
        }
    }
}

/// Validate a step transition.
///
/// The wizard moves exactly one step forward or one step backward at a time;
/// jumping is not allowed.
pub fn validate_step_transition(current: u8, next: u8) -> Result<(), CoreError> {
    if !(MIN_STEP..=MAX_STEP).contains(&current) {
        return Err(CoreError::Validation(format!(
            "Current step {current} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }
    if !(MIN_STEP..=MAX_STEP).contains(&next) {
        return Err(CoreError::Validation(format!(
            "Next step {next} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }

    let diff = (next as i16) - (current as i16);
    if diff != 1 && diff != -1 {
        return Err(CoreError::Validation(format!(
            "Cannot move from step {current} to step {next}. \
             Must advance or go back exactly one step."
        )));
    }

    Ok(())
}
