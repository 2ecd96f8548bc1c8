//! Basic-info section: identity, contact, identity numbers, and working
//! information. Saving this section for a new application is what mints the
//! temp payroll id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{
    form_day, form_field, validate_record, ActingUser, AADHAAR_PATTERN, PAN_PATTERN,
    PHONE_PATTERN,
};
use crate::types::RefId;
use crate::validation::{Condition, FieldRule, ValidationResult};
use crate::wire::parse_day;

/// Reference ids that drive the conditional rules, resolved by the caller
/// from the hiring-mode and join-type lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicInfoRuleContext {
    /// Hiring mode that makes the contract dates mandatory.
    pub consultant_mode_id: Option<RefId>,
    /// Join type that makes the replacement employee mandatory.
    pub replacement_join_type_id: Option<RefId>,
}

/// The basic-info section form. Dropdown ids are held as strings, dates as
/// `YYYY-MM-DD` day strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfoForm {
    pub emp_id: RefId,
    pub mode_of_hiring_id: String,
    pub first_name: String,
    pub last_name: String,
    pub adhaar_name: String,
    pub adhaar_no: String,
    pub adhaar_enrolment_no: String,
    pub gender_id: String,
    pub date_of_birth: String,
    pub age: String,
    pub father_name: String,
    pub primary_mobile_no: String,
    pub email: String,
    pub pancard_num: String,
    pub blood_group_id: String,
    pub religion_id: String,
    pub caste_id: String,
    pub category_id: String,
    pub marital_status_id: String,
    pub qualification_id: String,
    pub emergency_ph_no: String,
    pub emergency_relation_id: String,
    pub ssc_no: String,
    pub ssc_not_available: bool,
    pub campus_id: String,
    pub building_id: String,
    pub manager_id: String,
    pub hired_by_emp_id: String,
    pub emp_work_mode_id: String,
    pub join_type_id: String,
    /// Employee being replaced, mandatory for the replacement join type.
    pub replacement_emp_id: String,
    pub date_of_join: String,
    pub contract_start_date: String,
    pub contract_end_date: String,
    pub uan_no: String,
    pub temp_payroll_id: String,
}

impl BasicInfoForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild form state from the basic-info read endpoint.
    pub fn from_saved(value: &Value, temp_id: &str) -> Self {
        Self {
            emp_id: value.get("empId").and_then(Value::as_i64).unwrap_or(0),
            mode_of_hiring_id: form_field(value.get("modeOfHiringId")),
            first_name: form_field(value.get("firstName")),
            last_name: form_field(value.get("lastName")),
            adhaar_name: form_field(value.get("adhaarName")),
            adhaar_no: form_field(value.get("adhaarNo")),
            adhaar_enrolment_no: form_field(value.get("adhaarEnrolmentNo")),
            gender_id: form_field(value.get("genderId")),
            date_of_birth: form_day(value.get("dateOfBirth")),
            age: form_field(value.get("age")),
            father_name: form_field(value.get("fatherName")),
            primary_mobile_no: form_field(value.get("primaryMobileNo")),
            email: form_field(value.get("email")),
            pancard_num: form_field(value.get("pancardNum")),
            blood_group_id: form_field(value.get("bloodGroupId")),
            religion_id: form_field(value.get("religionId")),
            caste_id: form_field(value.get("casteId")),
            category_id: form_field(value.get("categoryId")),
            marital_status_id: form_field(value.get("maritalStatusId")),
            qualification_id: form_field(value.get("qualificationId")),
            emergency_ph_no: form_field(value.get("emergencyPhNo")),
            emergency_relation_id: form_field(value.get("emergencyRelationId")),
            ssc_no: form_field(value.get("sscNo")),
            ssc_not_available: matches!(value.get("sscNotAvailable"), Some(Value::Bool(true))),
            campus_id: form_field(value.get("campusId")),
            building_id: form_field(value.get("buildingId")),
            manager_id: form_field(value.get("managerId")),
            hired_by_emp_id: form_field(value.get("hiredByEmpId")),
            emp_work_mode_id: form_field(value.get("empWorkModeId")),
            join_type_id: form_field(value.get("joinTypeId")),
            replacement_emp_id: form_field(value.get("replacementEmpId")),
            date_of_join: form_day(value.get("dateOfJoin")),
            contract_start_date: form_day(value.get("contractStartDate")),
            contract_end_date: form_day(value.get("contractEndDate")),
            uan_no: form_field(value.get("uanNo")),
            temp_payroll_id: temp_id.to_string(),
        }
    }

    pub fn rules(ctx: BasicInfoRuleContext) -> Vec<FieldRule> {
        let mut rules = vec![
            FieldRule::required("adhaarName", "Aadhaar Name is required"),
            FieldRule::required("firstName", "First Name is required"),
            FieldRule::required("lastName", "Surname is required"),
            FieldRule::required("fatherName", "Father Name is required"),
            FieldRule::required("genderId", "Gender is required"),
            FieldRule::required("adhaarNo", "Aadhaar No is required"),
            FieldRule::pattern("adhaarNo", AADHAAR_PATTERN, "Aadhaar must be exactly 12 digits"),
            FieldRule::required("pancardNum", "PAN is required"),
            FieldRule::pattern("pancardNum", PAN_PATTERN, "Invalid PAN Format (e.g., ABCDE1234F)"),
            FieldRule::required("primaryMobileNo", "Mobile Number is required"),
            FieldRule::pattern("primaryMobileNo", PHONE_PATTERN, "Invalid Mobile Number"),
            FieldRule::required("email", "Email is required"),
            FieldRule::email("email", "Invalid email format"),
            FieldRule::required("emergencyPhNo", "Emergency Contact is required"),
            FieldRule::pattern("emergencyPhNo", PHONE_PATTERN, "Invalid Emergency Number"),
            FieldRule::required("dateOfBirth", "Date of Birth is required"),
            FieldRule::required("dateOfJoin", "Date of Joining is required"),
            FieldRule::required("maritalStatusId", "Marital Status is required"),
            FieldRule::required("qualificationId", "Qualification is required"),
            FieldRule::required("bloodGroupId", "Blood Group is required"),
            FieldRule::required("religionId", "Religion is required"),
            FieldRule::required("categoryId", "Category is required"),
            FieldRule::required("emergencyRelationId", "Relation is required"),
            FieldRule::required("modeOfHiringId", "Mode of Hiring is required"),
            FieldRule::required("campusId", "Campus is required"),
            FieldRule::required("managerId", "Manager is required"),
            FieldRule::required("joinTypeId", "Joining As is required"),
            FieldRule::required("hiredByEmpId", "Hired By is required"),
            FieldRule::required("empWorkModeId", "Work Mode is required"),
            FieldRule::required("sscNo", "SSC No is required")
                .when(Condition::equals("sscNotAvailable", json!(false))),
        ];

        if let Some(consultant) = ctx.consultant_mode_id {
            let is_consultant = Condition::equals("modeOfHiringId", json!(consultant));
            rules.push(
                FieldRule::required("contractStartDate", "Start Date required for Consultants")
                    .when(is_consultant.clone()),
            );
            rules.push(
                FieldRule::required("contractEndDate", "End Date required for Consultants")
                    .when(is_consultant),
            );
        }
        if let Some(replacement) = ctx.replacement_join_type_id {
            rules.push(
                FieldRule::required("replacementEmpId", "Replacement Employee is required")
                    .when(Condition::equals("joinTypeId", json!(replacement))),
            );
        }
        rules
    }

    /// Validate field rules plus the cross-field date ordering. `today`
    /// anchors the "date of birth not in the future" check.
    pub fn validate(&self, ctx: BasicInfoRuleContext, today: NaiveDate) -> ValidationResult {
        let mut result = validate_record(&Self::rules(ctx), self);

        let dob = parse_day(&self.date_of_birth);
        if let Some(dob) = dob {
            if dob > today {
                result.push("dateOfBirth", "Date of Birth cannot be in the future");
            }
        }
        if let (Some(dob), Some(doj)) = (dob, parse_day(&self.date_of_join)) {
            if doj < dob {
                result.push(
                    "dateOfJoin",
                    "Date of Joining cannot be before Date of Birth",
                );
            }
        }
        if let (Some(start), Some(end)) = (
            parse_day(&self.contract_start_date),
            parse_day(&self.contract_end_date),
        ) {
            if end < start {
                result.push("contractEndDate", "End Date must be after Start Date");
            }
        }
        result
    }

    /// Body for the generate-temp-payroll-id call: the whole form stamped
    /// with the acting user.
    pub fn payload(&self, acting: ActingUser) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Some(map) = value.as_object_mut() {
            map.insert("createdBy".into(), json!(acting.employee_id));
            map.insert("updatedBy".into(), json!(acting.employee_id));
        }
        value
    }
}
