//! Qualification section: repeated qualification rows with certificate
//! attachments.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{validate_record, ActingUser, YEAR_PATTERN};
use crate::validation::{FieldRule, ValidationResult};
use crate::wire::num_or_zero;

/// One qualification row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualificationRow {
    pub qualification_id: String,
    pub qualification_degree_id: String,
    pub specialization: String,
    pub university: String,
    pub institute: String,
    pub passed_out_year: String,
    pub is_submitted_certificate: bool,
    /// Uploaded certificate paths, joined into one string on the wire.
    pub certificate_files: Vec<String>,
}

impl QualificationRow {
    fn payload(&self) -> Value {
        json!({
            "qualificationId": num_or_zero(&self.qualification_id),
            "qualificationDegreeId": num_or_zero(&self.qualification_degree_id),
            "specialization": self.specialization,
            "university": self.university,
            "institute": self.institute,
            "passedOutYear": num_or_zero(&self.passed_out_year),
            "certificateFile": self.certificate_files.join(","),
        })
    }
}

fn row_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::required("qualificationId", "Qualification is required"),
        FieldRule::required("qualificationDegreeId", "Degree is required"),
        FieldRule::required("specialization", "Specialization is required"),
        FieldRule::required("university", "University is required"),
        FieldRule::required("institute", "Institute Name is required"),
        FieldRule::required("passedOutYear", "Pass out Year is required"),
        FieldRule::pattern("passedOutYear", YEAR_PATTERN, "Enter valid year (YYYY)"),
    ]
}

/// The qualification section form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualificationForm {
    pub qualifications: Vec<QualificationRow>,
}

impl Default for QualificationForm {
    fn default() -> Self {
        Self {
            qualifications: vec![QualificationRow::default()],
        }
    }
}

impl QualificationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> ValidationResult {
        let rules = row_rules();
        let mut result = ValidationResult::ok();
        for (i, row) in self.qualifications.iter().enumerate() {
            let mut row_result = validate_record(&rules, row);
            for violation in &mut row_result.errors {
                violation.field = format!("qualifications[{i}].{}", violation.field);
            }
            result.merge(row_result);
        }
        result
    }

    pub fn payload(&self, acting: ActingUser) -> Value {
        json!({
            "qualifications": self
                .qualifications
                .iter()
                .map(QualificationRow::payload)
                .collect::<Vec<_>>(),
            "createdBy": acting.employee_id,
            "updatedBy": acting.employee_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_row() -> QualificationRow {
        QualificationRow {
            qualification_id: "2".into(),
            qualification_degree_id: "14".into(),
            specialization: "Mathematics".into(),
            university: "Acharya Nagarjuna University".into(),
            institute: "ANU College".into(),
            passed_out_year: "2019".into(),
            ..QualificationRow::default()
        }
    }

    #[test]
    fn filled_row_passes() {
        let form = QualificationForm {
            qualifications: vec![filled_row()],
        };
        assert!(form.validate().is_valid);
    }

    #[test]
    fn year_must_be_four_digits() {
        let mut row = filled_row();
        row.passed_out_year = "19".into();
        let form = QualificationForm {
            qualifications: vec![row],
        };
        let result = form.validate();
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "qualifications[0].passedOutYear"));
    }

    #[test]
    fn violations_carry_the_row_index() {
        let form = QualificationForm {
            qualifications: vec![filled_row(), QualificationRow::default()],
        };
        let result = form.validate();
        assert!(result
            .errors
            .iter()
            .all(|e| e.field.starts_with("qualifications[1].")));
    }

    #[test]
    fn certificate_files_joined_on_the_wire() {
        let mut row = filled_row();
        row.certificate_files = vec!["a.pdf".into(), "b.pdf".into()];
        let form = QualificationForm {
            qualifications: vec![row],
        };
        let payload = form.payload(ActingUser::new(5109));
        assert_eq!(
            payload["qualifications"][0]["certificateFile"],
            json!("a.pdf,b.pdf")
        );
        assert_eq!(payload["qualifications"][0]["passedOutYear"], json!(2019));
    }
}
