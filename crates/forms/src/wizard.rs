//! The onboarding entry wizard session.
//!
//! One session covers one application from first save to submission. The
//! temp payroll id does not exist until the first basic-info save mints it
//! on the server; from then on the session threads the minted id through
//! every section call. Resumed applications start in edit mode with the id
//! already known.

use chrono::NaiveDate;
use serde_json::Value;

use onboard_client::OnboardClient;
use onboard_core::error::CoreError;
use onboard_core::sections::basic_info::{BasicInfoForm, BasicInfoRuleContext};
use onboard_core::sections::ActingUser;
use onboard_core::steps::{validate_step_transition, WizardStep};
use onboard_core::types::TempPayrollId;
use onboard_core::validation::ValidationResult;

use crate::error::FormsError;
use crate::saver;

pub struct WizardSession {
    client: OnboardClient,
    acting: ActingUser,
    temp_id: Option<TempPayrollId>,
    step: WizardStep,
    edit_mode: bool,
}

impl WizardSession {
    /// Begin a brand-new application. No temp payroll id exists yet.
    pub fn start(client: OnboardClient, acting: ActingUser) -> Self {
        Self {
            client,
            acting,
            temp_id: None,
            step: WizardStep::BasicInfo,
            edit_mode: false,
        }
    }

    /// Reopen an incomplete application for editing.
    pub fn resume(client: OnboardClient, acting: ActingUser, temp_id: TempPayrollId) -> Self {
        Self {
            client,
            acting,
            temp_id: Some(temp_id),
            step: WizardStep::BasicInfo,
            edit_mode: true,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn temp_id(&self) -> Option<&TempPayrollId> {
        self.temp_id.as_ref()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn acting(&self) -> ActingUser {
        self.acting
    }

    fn require_temp_id(&self) -> Result<&TempPayrollId, FormsError> {
        self.temp_id.as_ref().ok_or(FormsError::MissingTempId)
    }

    // ---- step movement ----

    /// Advance one step. Jumping is not possible; the move is checked all
    /// the same so a corrupted step counter fails loudly.
    pub fn advance(&mut self) -> Result<WizardStep, FormsError> {
        let next = self.step.to_number() + 1;
        validate_step_transition(self.step.to_number(), next)?;
        self.step = WizardStep::from_number(next)?;
        Ok(self.step)
    }

    pub fn back(&mut self) -> Result<WizardStep, FormsError> {
        let current = self.step.to_number();
        if current == 1 {
            return Err(CoreError::Validation(
                "Already at the first step".to_string(),
            )
            .into());
        }
        validate_step_transition(current, current - 1)?;
        self.step = WizardStep::from_number(current - 1)?;
        Ok(self.step)
    }

    // ---- saves ----

    /// Save basic info. The first save of a new application mints the temp
    /// payroll id on the server; every later save is a plain section upsert
    /// against that id.
    pub async fn save_basic_info(
        &mut self,
        form: &BasicInfoForm,
        ctx: BasicInfoRuleContext,
        today: NaiveDate,
    ) -> Result<&TempPayrollId, FormsError> {
        let validation = form.validate(ctx, today);
        if !validation.is_valid {
            return Err(FormsError::Invalid(validation));
        }
        let payload = form.payload(self.acting);

        match &self.temp_id {
            None => {
                let minted = self
                    .client
                    .generate_temp_payroll_id(self.acting.employee_id, &payload)
                    .await?;
                tracing::info!(temp_id = %minted.temp_payroll_id, "temp payroll id minted");
                self.temp_id = Some(TempPayrollId::new(minted.temp_payroll_id)?);
            }
            Some(temp_id) => {
                self.client
                    .save_section(WizardStep::BasicInfo, temp_id, &payload)
                    .await?;
            }
        }
        self.require_temp_id()
    }

    /// Save the section the wizard is currently on. The caller has already
    /// run the section's rules and built its wire payload.
    pub async fn save_current(
        &self,
        validation: &ValidationResult,
        payload: &Value,
    ) -> Result<(), FormsError> {
        saver::save_section(
            &self.client,
            self.step,
            self.temp_id.as_ref(),
            validation,
            payload,
        )
        .await
    }

    /// Submit the completed application to the divisional office. Only
    /// available from the final step.
    pub async fn submit(&self, payload: &Value) -> Result<(), FormsError> {
        if self.step != WizardStep::Documents {
            return Err(CoreError::Validation(format!(
                "Submission is only available from the final step, not {}",
                self.step.label()
            ))
            .into());
        }
        let temp_id = self.require_temp_id()?;
        self.client
            .forward_to_divisional_office(temp_id, payload)
            .await?;
        tracing::info!(temp_id = temp_id.as_str(), "application forwarded to DO");
        Ok(())
    }

    // ---- edit-mode pre-population ----

    /// Fetch the saved basic info and rebuild the form from it.
    pub async fn load_basic_info(&self) -> Result<BasicInfoForm, FormsError> {
        let temp_id = self.require_temp_id()?;
        let saved = self.client.basic_info(temp_id).await?;
        Ok(BasicInfoForm::from_saved(&saved, temp_id.as_str()))
    }

    /// Fetch a saved section's raw record for pre-population. Sections
    /// without a read endpoint start empty when resumed.
    pub async fn load_saved(&self, step: WizardStep) -> Result<Option<Value>, FormsError> {
        let temp_id = self.require_temp_id()?;
        let saved = match step {
            WizardStep::BasicInfo => Some(self.client.basic_info(temp_id).await?),
            WizardStep::Address => Some(self.client.address(temp_id).await?),
            WizardStep::Bank => Some(self.client.bank_details(temp_id).await?),
            WizardStep::Qualification => Some(self.client.qualifications(temp_id).await?),
            _ => None,
        };
        Ok(saved)
    }
}
