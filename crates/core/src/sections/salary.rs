//! Salary section. PF and ESI details ride on the payload only while the
//! matching eligibility flag is set; otherwise they are nulled.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{validate_record, ActingUser};
use crate::types::TempPayrollId;
use crate::validation::{FieldRule, ValidationResult};
use crate::wire::{iso_midnight, num_or_zero, opt_num};

/// The salary section form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryForm {
    pub monthly_take_home: String,
    pub yearly_ctc: String,
    pub ctc_words: String,
    pub grade_id: String,
    pub cost_center_id: String,
    pub emp_structure_id: String,
    pub org_id: String,
    pub is_pf_eligible: bool,
    pub pf_no: String,
    pub pf_join_date: String,
    pub uan_no: String,
    pub is_esi_eligible: bool,
    pub esi_no: String,
}

impl SalaryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules() -> Vec<FieldRule> {
        vec![
            FieldRule::required("monthlyTakeHome", "Monthly Take Home is required"),
            FieldRule::numeric("monthlyTakeHome", "Must be a number"),
            FieldRule::required("yearlyCtc", "Yearly CTC is required"),
            FieldRule::numeric("yearlyCtc", "Must be a number"),
            FieldRule::required("gradeId", "Grade is required"),
            FieldRule::required("empStructureId", "Structure is required"),
            FieldRule::required("orgId", "Company Name is required"),
        ]
    }

    pub fn validate(&self) -> ValidationResult {
        validate_record(&Self::rules(), self)
    }

    /// Wire payload. Unlike the other sections this one carries the temp
    /// payroll id in the body as well as the URL.
    pub fn payload(&self, temp_id: &TempPayrollId, acting: ActingUser) -> Value {
        json!({
            "tempPayrollId": temp_id.as_str(),
            "monthlyTakeHome": num_or_zero(&self.monthly_take_home),
            "yearlyCtc": num_or_zero(&self.yearly_ctc),
            "ctcWords": self.ctc_words,
            "empStructureId": num_or_zero(&self.emp_structure_id),
            "gradeId": num_or_zero(&self.grade_id),
            "costCenterId": num_or_zero(&self.cost_center_id),
            "orgId": num_or_zero(&self.org_id),
            "isPfEligible": self.is_pf_eligible,
            "isEsiEligible": self.is_esi_eligible,
            "pfNo": if self.is_pf_eligible {
                json!(self.pf_no)
            } else {
                Value::Null
            },
            "pfJoinDate": if self.is_pf_eligible {
                json!(iso_midnight(&self.pf_join_date))
            } else {
                Value::Null
            },
            "uanNo": if self.is_pf_eligible {
                json!(opt_num(&self.uan_no))
            } else {
                Value::Null
            },
            "esiNo": if self.is_esi_eligible {
                json!(opt_num(&self.esi_no))
            } else {
                Value::Null
            },
            "updatedBy": acting.employee_id,
        })
    }
}
