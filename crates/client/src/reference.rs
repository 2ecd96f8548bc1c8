//! Reference dropdown lists.
//!
//! These are static or slow-moving lists; each read retries once on
//! failure, unlike the rest of the client which fails fast.

use onboard_core::lookup::RefItem;
use onboard_core::types::RefId;

use crate::error::ClientError;
use crate::http::OnboardClient;

impl OnboardClient {
    /// Qualification levels.
    pub async fn qualification_list(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("qualifications"))
            .await
    }

    /// Degrees under a qualification.
    pub async fn degrees_by_qualification(
        &self,
        qualification_id: RefId,
    ) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url(&format!("degree/{qualification_id}")))
            .await
    }

    /// Cities within a district.
    pub async fn cities_by_district(&self, district_id: RefId) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url(&format!("cities/district/{district_id}")))
            .await
    }

    /// Employee types (teaching / non-teaching).
    pub async fn employee_types(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("employee-types"))
            .await
    }

    /// Departments under an employee type.
    pub async fn departments_by_type(
        &self,
        employee_type_id: RefId,
    ) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url(&format!("departments/{employee_type_id}")))
            .await
    }

    /// Designations under a department.
    pub async fn designations_by_department(
        &self,
        department_id: RefId,
    ) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url(&format!("designations/{department_id}")))
            .await
    }

    /// Banks.
    pub async fn banks(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("banks")).await
    }

    /// Branches of a bank.
    pub async fn branches_by_bank(&self, bank_id: RefId) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url(&format!("branches/{bank_id}")))
            .await
    }

    /// Salary grades.
    pub async fn grades(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("grade")).await
    }

    /// Cost centers.
    pub async fn cost_centers(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("costcenters"))
            .await
    }

    /// Salary structures.
    pub async fn structures(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("structures"))
            .await
    }

    /// Active organizations.
    pub async fn active_organizations(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("organizations/active"))
            .await
    }

    /// Active document types for the upload section.
    pub async fn active_document_types(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("active/DocumentTypes"))
            .await
    }

    /// Active checklist items tracked during DO/CO review.
    pub async fn active_checklist_details(&self) -> Result<Vec<RefItem>, ClientError> {
        self.get_json_with_retry(&self.module_url("active/ChecklistDetails"))
            .await
    }
}
