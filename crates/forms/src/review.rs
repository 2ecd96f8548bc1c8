//! DO and CO review sessions.
//!
//! A review session wraps one pending application on one reviewer's desk.
//! Every workflow move is checked against the status transition table
//! before the corresponding endpoint is called, so a stale screen can
//! never replay a move the application has already left behind.
//!
//! The DO defers the salary section: it is validated and staged locally,
//! then rides the forward-to-CO call instead of being saved on its own.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use onboard_client::OnboardClient;
use onboard_core::error::CoreError;
use onboard_core::router::{route, ApplicationRow, Destination, Office};
use onboard_core::sections::salary::SalaryForm;
use onboard_core::sections::ActingUser;
use onboard_core::status::ApplicationStatus;
use onboard_core::types::{RefId, TempPayrollId};
use onboard_core::wire::join_ids;

use crate::error::FormsError;

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

/// The reviewer's checklist tick state. Ids are kept unique and ordered so
/// the comma-joined wire string is stable.
#[derive(Debug, Clone, Default)]
pub struct ChecklistSelection {
    selected: BTreeSet<RefId>,
}

impl ChecklistSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: RefId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: RefId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> Vec<RefId> {
        self.selected.iter().copied().collect()
    }
}

// ---------------------------------------------------------------------------
// Review session
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ReviewSession {
    client: OnboardClient,
    acting: ActingUser,
    office: Office,
    temp_id: TempPayrollId,
    status: ApplicationStatus,
    checklist: ChecklistSelection,
    notice_period: Option<String>,
    staged_salary: Option<Value>,
}

impl ReviewSession {
    /// Open a review session for a queue row. Fails when the row does not
    /// route to a review screen.
    pub fn from_row(
        client: OnboardClient,
        acting: ActingUser,
        row: &ApplicationRow,
    ) -> Result<Self, FormsError> {
        let status = ApplicationStatus::parse(&row.status)?;
        match route(row)? {
            Destination::Review { office, temp_id } => Ok(Self {
                client,
                acting,
                office,
                temp_id,
                status,
                checklist: ChecklistSelection::new(),
                notice_period: None,
                staged_salary: None,
            }),
            _ => Err(CoreError::Validation(format!(
                "Application {} is not awaiting review",
                row.hr_employee_id
            ))
            .into()),
        }
    }

    pub fn office(&self) -> Office {
        self.office
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn temp_id(&self) -> &TempPayrollId {
        &self.temp_id
    }

    pub fn checklist(&self) -> &ChecklistSelection {
        &self.checklist
    }

    pub fn toggle_checklist(&mut self, id: RefId) {
        self.checklist.toggle(id);
    }

    pub fn set_notice_period(&mut self, notice_period: impl Into<String>) {
        self.notice_period = Some(notice_period.into());
    }

    fn require_office(&self, office: Office) -> Result<(), FormsError> {
        if self.office != office {
            return Err(CoreError::Validation(format!(
                "Action not available at this desk ({:?})",
                self.office
            ))
            .into());
        }
        Ok(())
    }

    // ---- section reads for the review panes ----

    pub async fn basic_info(&self) -> Result<Value, FormsError> {
        Ok(self.client.basic_info(&self.temp_id).await?)
    }

    pub async fn address(&self) -> Result<Value, FormsError> {
        Ok(self.client.address(&self.temp_id).await?)
    }

    pub async fn bank_details(&self) -> Result<Value, FormsError> {
        Ok(self.client.bank_details(&self.temp_id).await?)
    }

    pub async fn agreement_cheque(&self) -> Result<Value, FormsError> {
        Ok(self.client.agreement_cheque(&self.temp_id).await?)
    }

    pub async fn qualifications(&self) -> Result<Value, FormsError> {
        Ok(self.client.qualifications(&self.temp_id).await?)
    }

    pub async fn salary_details(&self) -> Result<Value, FormsError> {
        Ok(self.client.salary_details(&self.temp_id).await?)
    }

    // ---- DO actions ----

    /// Validate and stage the salary section. It is not saved here; it
    /// rides the forward-to-CO body.
    pub fn stage_salary(&mut self, form: &SalaryForm) -> Result<(), FormsError> {
        self.require_office(Office::Divisional)?;
        let validation = form.validate();
        if !validation.is_valid {
            return Err(FormsError::Invalid(validation));
        }
        self.staged_salary = Some(form.payload(&self.temp_id, self.acting));
        Ok(())
    }

    pub fn has_staged_salary(&self) -> bool {
        self.staged_salary.is_some()
    }

    /// DO forwards the application to the central office. The staged salary
    /// payload and the checklist selection travel in one body.
    pub async fn forward(&mut self) -> Result<(), FormsError> {
        self.require_office(Office::Divisional)?;
        self.status
            .validate_transition(ApplicationStatus::PendingAtCo)?;
        // Cloned rather than taken so a failed call leaves it staged.
        let salary = self
            .staged_salary
            .clone()
            .ok_or_else(|| CoreError::Validation("Salary details are required".to_string()))?;

        let mut body = match salary {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("salary".to_string(), other);
                map
            }
        };
        body.insert(
            "tempPayrollId".to_string(),
            Value::String(self.temp_id.as_str().to_string()),
        );
        body.insert(
            "checkListIds".to_string(),
            Value::String(join_ids(&self.checklist.ids())),
        );
        body.insert("updatedBy".to_string(), self.acting.employee_id.into());

        self.client
            .forward_to_central_office(&self.temp_id, &Value::Object(body))
            .await?;
        self.staged_salary = None;
        self.status = ApplicationStatus::PendingAtCo;
        tracing::info!(temp_id = self.temp_id.as_str(), "forwarded to CO");
        Ok(())
    }

    /// DO sends the application back to the campus for re-entry.
    pub async fn send_back_to_campus(&mut self, remarks: &str) -> Result<(), FormsError> {
        self.require_office(Office::Divisional)?;
        self.status
            .validate_transition(ApplicationStatus::Incomplete)?;
        self.client
            .back_to_campus(&self.temp_id, remarks, self.acting.employee_id)
            .await?;
        self.status = ApplicationStatus::Incomplete;
        Ok(())
    }

    // ---- CO actions ----

    /// CO confirms the application. The notice period is mandatory; the
    /// checklist selection is recorded with the confirmation.
    pub async fn confirm(&mut self) -> Result<(), FormsError> {
        self.require_office(Office::Central)?;
        self.status
            .validate_transition(ApplicationStatus::Confirmed)?;
        let notice_period = self
            .notice_period
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or(FormsError::MissingNoticePeriod)?;

        self.client
            .update_checklist(
                &self.temp_id,
                &self.checklist.ids(),
                notice_period,
                self.acting.employee_id,
            )
            .await?;
        self.status = ApplicationStatus::Confirmed;
        tracing::info!(temp_id = self.temp_id.as_str(), "application confirmed");
        Ok(())
    }

    /// CO rejects the application back to the divisional office.
    pub async fn reject_to_do(&mut self, remarks: &str) -> Result<(), FormsError> {
        self.require_office(Office::Central)?;
        self.status
            .validate_transition(ApplicationStatus::PendingAtDo)?;
        self.client
            .reject_back_to_do(&self.temp_id, remarks, self.acting.employee_id)
            .await?;
        self.status = ApplicationStatus::PendingAtDo;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
