//! Section reads and upserts keyed by temp payroll id, and the onboarding
//! queue.

use serde::Deserialize;
use serde_json::Value;

use onboard_core::router::ApplicationRow;
use onboard_core::steps::WizardStep;
use onboard_core::types::{RefId, TempPayrollId};

use crate::error::ClientError;
use crate::http::OnboardClient;

/// Response from the generate-temp-payroll-id endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTempId {
    pub temp_payroll_id: String,
}

impl OnboardClient {
    /// Create a new application from minimal basic info. The server mints
    /// and returns the temp payroll id used by every later call.
    pub async fn generate_temp_payroll_id(
        &self,
        hr_employee_id: RefId,
        basic_info: &Value,
    ) -> Result<GeneratedTempId, ClientError> {
        let url = self.employee_url(&format!(
            "employee/generate-temp-payroll-id/{hr_employee_id}"
        ));
        self.post_json(&url, basic_info).await
    }

    /// Fetch the list of in-flight applications for the queue screen.
    pub async fn onboarding_queue(&self) -> Result<Vec<ApplicationRow>, ClientError> {
        let url = self.employee_url("employee/onboarding-status");
        self.get_json(&url).await
    }

    // ---- per-section reads (review screens and edit-mode pre-population) ----

    /// Saved basic info for a temp payroll id.
    pub async fn basic_info(&self, temp_id: &TempPayrollId) -> Result<Value, ClientError> {
        let url = self.employee_url(&format!(
            "EmpDetailsFORCODO/employee/basic-info/{temp_id}"
        ));
        self.get_json(&url).await
    }

    /// Saved current/permanent address blocks.
    pub async fn address(&self, temp_id: &TempPayrollId) -> Result<Value, ClientError> {
        let url = self.employee_url(&format!("EmpDetailsFORCODO/address/{temp_id}"));
        self.get_json(&url).await
    }

    /// Saved bank details (salary and personal accounts).
    pub async fn bank_details(&self, temp_id: &TempPayrollId) -> Result<Value, ClientError> {
        let url = self.employee_url(&format!("EmpDetailsFORCODO/EmpBankDetails/{temp_id}"));
        self.get_json(&url).await
    }

    /// Saved agreement and cheque details.
    pub async fn agreement_cheque(&self, temp_id: &TempPayrollId) -> Result<Value, ClientError> {
        let url = self.employee_url(&format!("EmpDetailsFORCODO/agreement-cheque/{temp_id}"));
        self.get_json(&url).await
    }

    /// Saved qualification rows.
    pub async fn qualifications(&self, temp_id: &TempPayrollId) -> Result<Value, ClientError> {
        let url = self.employee_url(&format!("EmpDetailsFORCODO/qualifications/{temp_id}"));
        self.get_json(&url).await
    }

    /// Saved salary details, fetched through the DO review surface.
    pub async fn salary_details(&self, temp_id: &TempPayrollId) -> Result<Value, ClientError> {
        let url = self.employee_url("employee/Do Controller/by-temp-payroll-id");
        self.get_json_with_query(&url, Some(&[("tempPayrollId", temp_id.as_str())]))
            .await
    }

    // ---- section upserts ----

    /// Upsert one section's payload, correlated by temp payroll id.
    pub async fn save_section(
        &self,
        step: WizardStep,
        temp_id: &TempPayrollId,
        payload: &Value,
    ) -> Result<(), ClientError> {
        let url = self.employee_url(&format!("employee/tab/{}", step.tab_slug()));
        self.post_json_with_query(&url, &[("tempPayrollId", temp_id.as_str())], payload)
            .await
    }

    /// Submit the completed application to the divisional office.
    pub async fn forward_to_divisional_office(
        &self,
        temp_id: &TempPayrollId,
        payload: &Value,
    ) -> Result<(), ClientError> {
        let url = self.employee_url(&format!(
            "employee/tab/forward-to-divisional-office/{temp_id}"
        ));
        self.post_json_unit(&url, payload).await
    }
}
