//! Family section: father, mother, and additional members.
//!
//! Phone and email are mandatory for a member only while the member is not
//! marked deceased. Members whose full name is empty are dropped from the
//! payload entirely.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{validate_record, ActingUser, PHONE_PATTERN};
use crate::types::RefId;
use crate::validation::{Condition, FieldRule, ValidationResult};
use crate::wire::{iso_midnight, num_or_zero};

/// Fixed relation ids for the two named members.
pub const FATHER_RELATION_ID: RefId = 1;
pub const MOTHER_RELATION_ID: RefId = 2;

/// One family member as held on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyMember {
    pub full_name: String,
    pub adhaar_no: String,
    /// Deceased flag. While set, phone and email become optional.
    pub is_late: bool,
    pub occupation: String,
    pub gender_id: String,
    pub blood_group_id: String,
    pub email: String,
    pub nationality: String,
    pub phone_number: String,
    pub relation_id: String,
    pub date_of_birth: String,
    pub is_dependent: bool,
    /// Member already works for the group; enables the linked employee id.
    pub is_group_employee: bool,
    pub linked_employee_id: String,
}

impl Default for FamilyMember {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            adhaar_no: String::new(),
            is_late: false,
            occupation: String::new(),
            gender_id: String::new(),
            blood_group_id: String::new(),
            email: String::new(),
            nationality: "Indian".to_string(),
            phone_number: String::new(),
            relation_id: String::new(),
            date_of_birth: String::new(),
            is_dependent: false,
            is_group_employee: false,
            linked_employee_id: String::new(),
        }
    }
}

impl FamilyMember {
    fn with_relation(relation_id: RefId, gender_id: RefId) -> Self {
        Self {
            relation_id: relation_id.to_string(),
            gender_id: gender_id.to_string(),
            ..Self::default()
        }
    }

    fn payload(&self) -> Value {
        let nationality = if self.nationality.is_empty() {
            "Indian"
        } else {
            self.nationality.as_str()
        };
        json!({
            "fullName": self.full_name,
            "adhaarNo": num_or_zero(&self.adhaar_no),
            "isLate": self.is_late,
            "occupationId": 0,
            "occupation": self.occupation,
            "genderId": num_or_zero(&self.gender_id),
            "bloodGroupId": num_or_zero(&self.blood_group_id),
            "email": self.email,
            "nationality": nationality,
            "phoneNumber": self.phone_number,
            "relationId": num_or_zero(&self.relation_id),
            "dateOfBirth": iso_midnight(&self.date_of_birth),
            "isDependent": self.is_dependent,
            "isGroupEmployee": self.is_group_employee,
            "parentEmpId": if self.is_group_employee {
                num_or_zero(&self.linked_employee_id)
            } else {
                0
            },
        })
    }
}

/// Per-member validation rules.
pub fn member_rules() -> Vec<FieldRule> {
    let alive = Condition::equals("isLate", json!(false));
    vec![
        FieldRule::required("fullName", "Name (as per Aadhaar) is required"),
        FieldRule::required("nationality", "Nationality is required"),
        FieldRule::required("genderId", "Gender is required"),
        FieldRule::required("relationId", "Relation is required"),
        FieldRule::required("phoneNumber", "Phone Number is required").when(alive.clone()),
        FieldRule::pattern("phoneNumber", PHONE_PATTERN, "Phone must be exactly 10 digits")
            .when(alive.clone()),
        FieldRule::required("email", "Email is required").when(alive.clone()),
        FieldRule::email("email", "Invalid email format").when(alive),
    ]
}

/// The family section form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyForm {
    pub father: FamilyMember,
    pub mother: FamilyMember,
    pub other_members: Vec<FamilyMember>,
    pub family_group_photo_path: String,
}

impl Default for FamilyForm {
    fn default() -> Self {
        Self {
            father: FamilyMember::with_relation(FATHER_RELATION_ID, 1),
            mother: FamilyMember::with_relation(MOTHER_RELATION_ID, 2),
            other_members: Vec::new(),
            family_group_photo_path: String::new(),
        }
    }
}

impl FamilyForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every member, prefixing violations with the member's slot
    /// so the caller can address the offending field.
    pub fn validate(&self) -> ValidationResult {
        let rules = member_rules();
        let mut result = ValidationResult::ok();

        let mut check = |prefix: String, member: &FamilyMember| {
            let mut member_result = validate_record(&rules, member);
            for violation in &mut member_result.errors {
                violation.field = format!("{prefix}.{}", violation.field);
            }
            result.merge(member_result);
        };

        check("father".into(), &self.father);
        check("mother".into(), &self.mother);
        for (i, member) in self.other_members.iter().enumerate() {
            check(format!("otherMembers[{i}]"), member);
        }
        result
    }

    /// Wire payload. Members with an empty full name are skipped.
    pub fn payload(&self, acting: ActingUser) -> Value {
        let members: Vec<Value> = [&self.father, &self.mother]
            .into_iter()
            .chain(self.other_members.iter())
            .filter(|m| !m.full_name.trim().is_empty())
            .map(FamilyMember::payload)
            .collect();

        json!({
            "familyMembers": members,
            "familyGroupPhotoPath": self.family_group_photo_path,
            "createdBy": acting.employee_id,
            "updatedBy": acting.employee_id,
        })
    }
}
