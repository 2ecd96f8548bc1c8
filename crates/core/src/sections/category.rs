//! Category section: employee type, department, designation, subject and
//! orientation.
//!
//! Subject and orientation requirements depend on which employee type is
//! selected, and the teaching/non-teaching type ids are resolved from the
//! reference list vocabulary rather than hardcoded.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{validate_record, ActingUser};
use crate::lookup::RefList;
use crate::types::RefId;
use crate::validation::{Condition, FieldRule, ValidationResult};
use crate::wire::num_or_zero;

/// Teaching / non-teaching type ids resolved from the employee-type list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeTypeIds {
    pub teaching: Option<RefId>,
    pub non_teaching: Option<RefId>,
}

impl EmployeeTypeIds {
    /// Resolve from the server list: the non-teaching entry contains "non",
    /// the teaching entry contains "teach" without "non".
    pub fn resolve(types: &RefList) -> Self {
        let mut ids = Self::default();
        for item in types.iter() {
            let name = item.name.to_lowercase();
            if name.contains("non") {
                ids.non_teaching.get_or_insert(item.id);
            } else if name.contains("teach") {
                ids.teaching.get_or_insert(item.id);
            }
        }
        ids
    }
}

/// The category section form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryForm {
    pub employee_type_id: String,
    pub department_id: String,
    pub designation_id: String,
    pub subject_id: String,
    pub orientation_id: String,
    pub agreed_periods_per_week: String,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation rules for the given resolved type ids. Subject is required
    /// only for the teaching type; orientation is waived for the
    /// non-teaching type and required otherwise.
    pub fn rules(types: EmployeeTypeIds) -> Vec<FieldRule> {
        let mut rules = vec![
            FieldRule::required("employeeTypeId", "Employee Type is required"),
            FieldRule::required("departmentId", "Department is required"),
            FieldRule::required("designationId", "Designation is required"),
            FieldRule::required("agreedPeriodsPerWeek", "Agreed Periods are required"),
            FieldRule::numeric("agreedPeriodsPerWeek", "Must be a number"),
        ];

        if let Some(teaching) = types.teaching {
            rules.push(
                FieldRule::required("subjectId", "Subject is required")
                    .when(Condition::equals("employeeTypeId", json!(teaching))),
            );
        }
        let orientation = FieldRule::required("orientationId", "Orientation is required");
        rules.push(match types.non_teaching {
            Some(non_teaching) => {
                orientation.when(Condition::not_equals("employeeTypeId", json!(non_teaching)))
            }
            None => orientation,
        });

        rules
    }

    pub fn validate(&self, types: EmployeeTypeIds) -> ValidationResult {
        validate_record(&Self::rules(types), self)
    }

    pub fn payload(&self, acting: ActingUser) -> Value {
        json!({
            "employeeTypeId": num_or_zero(&self.employee_type_id),
            "departmentId": num_or_zero(&self.department_id),
            "designationId": num_or_zero(&self.designation_id),
            "subjectId": num_or_zero(&self.subject_id),
            "orientationId": num_or_zero(&self.orientation_id),
            "agreedPeriodsPerWeek": num_or_zero(&self.agreed_periods_per_week),
            "createdBy": acting.employee_id,
            "updatedBy": acting.employee_id,
        })
    }
}
