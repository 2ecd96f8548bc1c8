//! Queue-row routing.
//!
//! The onboarding queue lists every in-flight application; clicking a row
//! opens a different screen depending on the row's status and skill-test
//! flag. All of that decision logic lives here so the shell only has to
//! match on a [`Destination`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::ApplicationStatus;
use crate::steps::WizardStep;
use crate::types::{RefId, TempPayrollId};

/// One row of the onboarding queue as the server returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub hr_employee_id: RefId,
    #[serde(default)]
    pub employee_name: String,
    pub status: String,
    #[serde(default)]
    pub temp_payroll_id: Option<String>,
    /// Set when the applicant has been sent for a skill test. Takes
    /// precedence over the status text when routing.
    #[serde(default)]
    pub skill_test: bool,
}

/// Which review office a pending application sits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Office {
    Divisional,
    Central,
}

/// Where a queue-row click navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Open the entry wizard. `edit_mode` marks a resumed application as
    /// opposed to a brand-new one.
    Wizard {
        temp_id: TempPayrollId,
        step: WizardStep,
        edit_mode: bool,
    },
    /// Open the read-only review screen for the given office.
    Review {
        office: Office,
        temp_id: TempPayrollId,
    },
    /// Open the skill-test decision screen.
    SkillTest { temp_id: TempPayrollId },
    /// Terminal rows render inert; there is nowhere to go.
    NotClickable,
}

/// Route a queue row to its destination screen.
///
/// Terminal rows never need a temp payroll id; every other destination does,
/// and a clickable row without one is a data error surfaced as
/// [`CoreError::MissingTempId`] rather than a broken navigation.
pub fn route(row: &ApplicationRow) -> Result<Destination, CoreError> {
    let status = ApplicationStatus::parse(&row.status)?;

    if status.is_terminal() {
        return Ok(Destination::NotClickable);
    }

    let temp_id = match &row.temp_payroll_id {
        Some(raw) => TempPayrollId::new(raw.clone())?,
        None => return Err(CoreError::MissingTempId),
    };

    if row.skill_test || status == ApplicationStatus::SkillTest {
        return Ok(Destination::SkillTest { temp_id });
    }

    Ok(match status {
        ApplicationStatus::Incomplete => Destination::Wizard {
            temp_id,
            step: WizardStep::BasicInfo,
            edit_mode: true,
        },
        ApplicationStatus::PendingAtDo => Destination::Review {
            office: Office::Divisional,
            temp_id,
        },
        ApplicationStatus::PendingAtCo => Destination::Review {
            office: Office::Central,
            temp_id,
        },
        // Handled above.
        ApplicationStatus::SkillTest
        | ApplicationStatus::Confirmed
        | ApplicationStatus::Rejected
        | ApplicationStatus::Left => unreachable!(),
    })
}

/// Whether a row responds to clicks at all.
pub fn is_clickable(row: &ApplicationRow) -> bool {
    !matches!(route(row), Ok(Destination::NotClickable))
}
