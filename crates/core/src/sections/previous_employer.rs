//! Previous-employer section: repeated employment history rows with
//! attached documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{validate_record, ActingUser};
use crate::types::RefId;
use crate::validation::{FieldRule, ValidationResult};
use crate::wire::{iso_midnight, opt_num, parse_day};

/// Document categories attached to a previous-employer row, with the fixed
/// type ids the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployerDocType {
    Payslips,
    Resignation,
    OfferLetter,
    Form12A,
    Gratuity,
    PfMergerLetter,
}

impl EmployerDocType {
    pub fn id(self) -> RefId {
        match self {
            Self::Payslips => 1,
            Self::Resignation => 2,
            Self::OfferLetter => 3,
            Self::Form12A => 4,
            Self::Gratuity => 5,
            Self::PfMergerLetter => 6,
        }
    }
}

/// One attached document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerDocument {
    pub doc_type: EmployerDocType,
    pub path: String,
    pub description: String,
}

/// One previous employment row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployerRow {
    pub company_name: String,
    pub designation: String,
    pub from_date: String,
    pub to_date: String,
    pub leaving_reason: String,
    pub company_address_line1: String,
    pub company_address_line2: String,
    pub company_address_line3: String,
    pub nature_of_duties: String,
    pub gross_salary_per_month: String,
    pub ctc: String,
    pub documents: Vec<EmployerDocument>,
}

impl EmployerRow {
    fn payload(&self) -> Value {
        let documents: Vec<Value> = self
            .documents
            .iter()
            .map(|doc| {
                json!({
                    "docPath": doc.path,
                    "docTypeId": doc.doc_type.id(),
                    "description": doc.description,
                })
            })
            .collect();

        json!({
            "companyName": self.company_name,
            "designation": self.designation,
            "fromDate": iso_midnight(&self.from_date),
            "toDate": iso_midnight(&self.to_date),
            "leavingReason": self.leaving_reason,
            "companyAddressLine1": self.company_address_line1,
            "companyAddressLine2": self.company_address_line2,
            "companyAddressLine3": self.company_address_line3,
            "natureOfDuties": self.nature_of_duties,
            "grossSalaryPerMonth": opt_num(&self.gross_salary_per_month).unwrap_or(0),
            "ctc": opt_num(&self.ctc).unwrap_or(0),
            "documents": documents,
        })
    }
}

fn row_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::required("companyName", "Company Name is required"),
        FieldRule::required("designation", "Designation is required"),
        FieldRule::required("fromDate", "From Date is required"),
        FieldRule::required("toDate", "To Date is required"),
        FieldRule::required("leavingReason", "Leaving Reason is required"),
        FieldRule::required("companyAddressLine1", "Address Line 1 is required"),
        FieldRule::required("natureOfDuties", "Nature of Duty is required"),
        FieldRule::required("grossSalaryPerMonth", "Gross Salary is required"),
        FieldRule::positive_number("grossSalaryPerMonth", "Must be positive"),
        FieldRule::required("ctc", "CTC is required"),
        FieldRule::positive_number("ctc", "Must be positive"),
    ]
}

/// The previous-employer section form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviousEmployerForm {
    pub previous_employers: Vec<EmployerRow>,
}

impl Default for PreviousEmployerForm {
    fn default() -> Self {
        Self {
            previous_employers: vec![EmployerRow::default()],
        }
    }
}

impl PreviousEmployerForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate all rows. `today` anchors the "from date not in the future"
    /// check so the result does not depend on ambient wall-clock time.
    pub fn validate(&self, today: NaiveDate) -> ValidationResult {
        let rules = row_rules();
        let mut result = ValidationResult::ok();

        for (i, row) in self.previous_employers.iter().enumerate() {
            let mut row_result = validate_record(&rules, row);
            for violation in &mut row_result.errors {
                violation.field = format!("previousEmployers[{i}].{}", violation.field);
            }
            result.merge(row_result);

            let from = parse_day(&row.from_date);
            let to = parse_day(&row.to_date);
            if let Some(from) = from {
                if from > today {
                    result.push(
                        format!("previousEmployers[{i}].fromDate"),
                        "From Date cannot be in the future",
                    );
                }
            }
            if let (Some(from), Some(to)) = (from, to) {
                if to < from {
                    result.push(
                        format!("previousEmployers[{i}].toDate"),
                        "To Date must be after From Date",
                    );
                }
            }
        }
        result
    }

    pub fn payload(&self, acting: ActingUser) -> Value {
        json!({
            "previousEmployers": self
                .previous_employers
                .iter()
                .map(EmployerRow::payload)
                .collect::<Vec<_>>(),
            "createdBy": acting.employee_id,
            "updatedBy": acting.employee_id,
        })
    }
}
