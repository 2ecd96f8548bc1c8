//! DO/CO workflow transition calls.
//!
//! Checklist ids ride these endpoints as one comma-joined string. The
//! `Do Controller` path segment carries a literal space, exactly as the
//! backend routes it; reqwest percent-encodes it on the wire.

use serde::Serialize;
use serde_json::Value;

use onboard_core::types::{RefId, TempPayrollId};
use onboard_core::wire::join_ids;

use crate::error::ClientError;
use crate::http::OnboardClient;

/// Body for the DO back-to-campus and CO reject-back-to-do calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    pub temp_payroll_id: String,
    pub remarks: String,
    pub updated_by: RefId,
}

/// Body for the CO confirm call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistUpdate {
    pub temp_payroll_id: String,
    /// Comma-joined checklist ids.
    pub check_list_ids: String,
    pub notice_period: String,
    pub updated_by: RefId,
}

impl OnboardClient {
    /// DO forwards an application to the central office. The body combines
    /// the deferred salary payload with the DO's checklist selection.
    pub async fn forward_to_central_office(
        &self,
        temp_id: &TempPayrollId,
        payload: &Value,
    ) -> Result<(), ClientError> {
        let url = self.employee_url(&format!(
            "employee/Do Controller/forward-to-central-office/{temp_id}"
        ));
        self.post_json_unit(&url, payload).await
    }

    /// CO confirms an application, recording its checklist and notice
    /// period.
    pub async fn update_checklist(
        &self,
        temp_id: &TempPayrollId,
        checklist_ids: &[RefId],
        notice_period: &str,
        updated_by: RefId,
    ) -> Result<(), ClientError> {
        let url = self.employee_url("employee/central-office/update-checklist");
        let body = ChecklistUpdate {
            temp_payroll_id: temp_id.as_str().to_string(),
            check_list_ids: join_ids(checklist_ids),
            notice_period: notice_period.to_string(),
            updated_by,
        };
        self.post_json_unit(&url, &body).await
    }

    /// CO rejects an application back to the divisional office.
    pub async fn reject_back_to_do(
        &self,
        temp_id: &TempPayrollId,
        remarks: &str,
        updated_by: RefId,
    ) -> Result<(), ClientError> {
        let url = self.employee_url("employee/central-office/reject-back-to-do");
        let body = RejectRequest {
            temp_payroll_id: temp_id.as_str().to_string(),
            remarks: remarks.to_string(),
            updated_by,
        };
        self.post_json_unit(&url, &body).await
    }

    /// DO rejects an application back to the campus for re-entry.
    pub async fn back_to_campus(
        &self,
        temp_id: &TempPayrollId,
        remarks: &str,
        updated_by: RefId,
    ) -> Result<(), ClientError> {
        let url = self.employee_url("employee/Do Controller/back-to-campus");
        let body = RejectRequest {
            temp_payroll_id: temp_id.as_str().to_string(),
            remarks: remarks.to_string(),
            updated_by,
        };
        self.post_json_unit(&url, &body).await
    }
}
