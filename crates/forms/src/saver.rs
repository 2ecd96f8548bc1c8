//! Save dispatch for section upserts.
//!
//! Every save follows the same contract: a missing temp payroll id fails
//! before anything touches the network, local validation failures never
//! reach the backend, and a failed upsert is surfaced to the caller with
//! no retry.

use serde_json::Value;

use onboard_client::OnboardClient;
use onboard_core::steps::WizardStep;
use onboard_core::types::TempPayrollId;
use onboard_core::validation::ValidationResult;

use crate::error::FormsError;

/// Guard a save attempt: temp id first, then local validation.
pub(crate) fn ensure_ready<'a>(
    temp_id: Option<&'a TempPayrollId>,
    validation: &ValidationResult,
) -> Result<&'a TempPayrollId, FormsError> {
    let temp_id = temp_id.ok_or(FormsError::MissingTempId)?;
    if !validation.is_valid {
        return Err(FormsError::Invalid(validation.clone()));
    }
    Ok(temp_id)
}

/// Upsert one section payload after the readiness checks pass.
pub async fn save_section(
    client: &OnboardClient,
    step: WizardStep,
    temp_id: Option<&TempPayrollId>,
    validation: &ValidationResult,
    payload: &Value,
) -> Result<(), FormsError> {
    let temp_id = ensure_ready(temp_id, validation)?;
    tracing::debug!(step = step.slug(), temp_id = temp_id.as_str(), "saving section");
    client
        .save_section(step, temp_id, payload)
        .await
        .map_err(|err| {
            tracing::error!(
                step = step.slug(),
                temp_id = temp_id.as_str(),
                error = %err,
                "section save failed"
            );
            FormsError::from(err)
        })
}
