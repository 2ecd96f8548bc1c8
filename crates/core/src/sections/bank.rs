//! Bank section: payment routing, salary account, and the conditional
//! personal account block.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{form_bool, form_field, validate_record, ActingUser};
use crate::validation::{Condition, FieldRule, ValidationResult};
use crate::wire::num_or_zero;

/// Personal account details, mandatory only while the salary-below-threshold
/// flag is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalAccount {
    pub bank_name: String,
    pub account_no: String,
    pub account_holder_name: String,
    pub ifsc_code: String,
    pub bank_manager_name: String,
    pub bank_manager_contact_no: String,
    pub bank_manager_email: String,
    pub customer_relationship_officer_name: String,
    pub customer_relationship_officer_contact_no: String,
    pub customer_relationship_officer_email: String,
}

/// Salary account details, always mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryAccount {
    pub account_no: String,
    pub account_holder_name: String,
    pub ifsc_code: String,
    pub payable_at: String,
    pub bank_manager_name: String,
    pub bank_manager_contact_no: String,
    pub bank_manager_email: String,
    pub customer_relationship_officer_name: String,
    pub customer_relationship_officer_contact_no: String,
    pub customer_relationship_officer_email: String,
}

/// The bank section form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankForm {
    pub payment_type_id: String,
    pub bank_id: String,
    pub bank_branch_id: String,
    /// Free-text branch name, used only when no branch id is selected.
    pub bank_branch_name: String,
    #[serde(rename = "salaryLessThan40000")]
    pub salary_less_than_40000: bool,
    pub personal_account: PersonalAccount,
    pub salary_account: SalaryAccount,
}

impl BankForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild form state from the per-section read endpoint.
    pub fn from_saved(value: &Value) -> Self {
        let personal = value.get("personalAccount").cloned().unwrap_or(json!({}));
        let salary = value.get("salaryAccount").cloned().unwrap_or(json!({}));
        Self {
            payment_type_id: form_field(value.get("paymentTypeId")),
            bank_id: form_field(value.get("bankId")),
            bank_branch_id: form_field(value.get("bankBranchId")),
            bank_branch_name: form_field(value.get("bankBranchName")),
            salary_less_than_40000: form_bool(value.get("salaryLessThan40000")),
            personal_account: PersonalAccount {
                bank_name: form_field(personal.get("bankName")),
                account_no: form_field(personal.get("accountNo")),
                account_holder_name: form_field(personal.get("accountHolderName")),
                ifsc_code: form_field(personal.get("ifscCode")),
                bank_manager_name: form_field(personal.get("bankManagerName")),
                bank_manager_contact_no: form_field(personal.get("bankManagerContactNo")),
                bank_manager_email: form_field(personal.get("bankManagerEmail")),
                customer_relationship_officer_name: form_field(
                    personal.get("customerRelationshipOfficerName"),
                ),
                customer_relationship_officer_contact_no: form_field(
                    personal.get("customerRelationshipOfficerContactNo"),
                ),
                customer_relationship_officer_email: form_field(
                    personal.get("customerRelationshipOfficerEmail"),
                ),
            },
            salary_account: SalaryAccount {
                account_no: form_field(salary.get("accountNo")),
                account_holder_name: form_field(salary.get("accountHolderName")),
                ifsc_code: form_field(salary.get("ifscCode")),
                payable_at: form_field(salary.get("payableAt")),
                bank_manager_name: form_field(salary.get("bankManagerName")),
                bank_manager_contact_no: form_field(salary.get("bankManagerContactNo")),
                bank_manager_email: form_field(salary.get("bankManagerEmail")),
                customer_relationship_officer_name: form_field(
                    salary.get("customerRelationshipOfficerName"),
                ),
                customer_relationship_officer_contact_no: form_field(
                    salary.get("customerRelationshipOfficerContactNo"),
                ),
                customer_relationship_officer_email: form_field(
                    salary.get("customerRelationshipOfficerEmail"),
                ),
            },
        }
    }

    pub fn rules() -> Vec<FieldRule> {
        let below_threshold = Condition::equals("salaryLessThan40000", json!(true));
        vec![
            FieldRule::required("paymentTypeId", "Payment Type is required"),
            FieldRule::required("bankId", "Bank Name is required"),
            FieldRule::required("bankBranchId", "Bank Branch is required"),
            FieldRule::required("salaryAccount.accountNo", "Account Number is required"),
            FieldRule::required("salaryAccount.ifscCode", "IFSC Code is required"),
            FieldRule::required("salaryAccount.payableAt", "Payable At is required"),
            FieldRule::required("personalAccount.bankName", "Personal Bank Name is required")
                .when(below_threshold.clone()),
            FieldRule::required("personalAccount.accountHolderName", "Holder Name is required")
                .when(below_threshold.clone()),
            FieldRule::required("personalAccount.accountNo", "Personal Account No is required")
                .when(below_threshold.clone()),
            FieldRule::required("personalAccount.ifscCode", "Personal IFSC is required")
                .when(below_threshold),
        ]
    }

    pub fn validate(&self) -> ValidationResult {
        validate_record(&Self::rules(), self)
    }

    /// Wire payload for the section upsert. A positive branch id is sent as
    /// the id with a null name; otherwise the free-text branch name rides
    /// instead. Contact numbers are coerced to numbers, zero when empty.
    pub fn payload(&self, acting: ActingUser) -> Value {
        let branch_id = num_or_zero(&self.bank_branch_id);
        let has_branch_id = branch_id > 0;

        json!({
            "paymentTypeId": num_or_zero(&self.payment_type_id),
            "bankId": num_or_zero(&self.bank_id),
            "bankBranchId": if has_branch_id { json!(branch_id) } else { Value::Null },
            "bankBranchName": if has_branch_id {
                Value::Null
            } else {
                json!(self.bank_branch_name)
            },
            "salaryLessThan40000": self.salary_less_than_40000,
            "personalAccount": {
                "bankName": self.personal_account.bank_name,
                "accountNo": self.personal_account.account_no,
                "accountHolderName": self.personal_account.account_holder_name,
                "ifscCode": self.personal_account.ifsc_code,
                "bankManagerName": self.personal_account.bank_manager_name,
                "bankManagerContactNo": num_or_zero(&self.personal_account.bank_manager_contact_no),
                "bankManagerEmail": self.personal_account.bank_manager_email,
                "customerRelationshipOfficerName":
                    self.personal_account.customer_relationship_officer_name,
                "customerRelationshipOfficerContactNo":
                    num_or_zero(&self.personal_account.customer_relationship_officer_contact_no),
                "customerRelationshipOfficerEmail":
                    self.personal_account.customer_relationship_officer_email,
            },
            "salaryAccount": {
                "bankId": num_or_zero(&self.bank_id),
                "accountNo": self.salary_account.account_no,
                "accountHolderName": self.salary_account.account_holder_name,
                "ifscCode": self.salary_account.ifsc_code,
                "payableAt": self.salary_account.payable_at,
                "bankManagerName": self.salary_account.bank_manager_name,
                "bankManagerContactNo": num_or_zero(&self.salary_account.bank_manager_contact_no),
                "bankManagerEmail": self.salary_account.bank_manager_email,
                "customerRelationshipOfficerName":
                    self.salary_account.customer_relationship_officer_name,
                "customerRelationshipOfficerContactNo":
                    num_or_zero(&self.salary_account.customer_relationship_officer_contact_no),
                "customerRelationshipOfficerEmail":
                    self.salary_account.customer_relationship_officer_email,
            },
            "createdBy": acting.employee_id,
            "updatedBy": acting.employee_id,
        })
    }
}
