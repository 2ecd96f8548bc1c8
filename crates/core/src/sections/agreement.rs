//! Agreement section: agreement type and the cheques submitted with it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{form_bool, form_field, validate_record, ActingUser};
use crate::validation::{FieldRule, ValidationResult};
use crate::wire::num_or_zero;

/// One submitted cheque.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChequeRow {
    pub cheque_no: String,
    pub cheque_bank_name: String,
    pub cheque_bank_ifsc_code: String,
}

/// The agreement section form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgreementForm {
    pub agreement_org_id: String,
    pub agreement_type: String,
    pub is_check_submit: bool,
    pub cheque_details: Vec<ChequeRow>,
}

impl Default for AgreementForm {
    fn default() -> Self {
        Self {
            agreement_org_id: String::new(),
            agreement_type: String::new(),
            is_check_submit: false,
            cheque_details: vec![ChequeRow::default()],
        }
    }
}

impl AgreementForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild form state from the agreement-cheque read endpoint. The
    /// cheque flag is inferred from whether any cheques came back.
    pub fn from_saved(value: &Value) -> Self {
        let cheques = value
            .get("cheques")
            .or_else(|| value.get("chequeDetails"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let has_cheques = !cheques.is_empty();
        let rows = if has_cheques {
            cheques
                .iter()
                .map(|chq| ChequeRow {
                    cheque_no: form_field(chq.get("chequeNo")),
                    cheque_bank_name: form_field(chq.get("chequeBankName")),
                    cheque_bank_ifsc_code: form_field(chq.get("chequeBankIfscCode")),
                })
                .collect()
        } else {
            vec![ChequeRow::default()]
        };

        Self {
            agreement_org_id: form_field(value.get("agreementOrgId")),
            agreement_type: form_field(value.get("agreementType")),
            is_check_submit: has_cheques || form_bool(value.get("isCheckSubmit")),
            cheque_details: rows,
        }
    }

    pub fn rules() -> Vec<FieldRule> {
        vec![FieldRule::required(
            "agreementType",
            "Agreement Type is required",
        )]
    }

    pub fn validate(&self) -> ValidationResult {
        validate_record(&Self::rules(), self)
    }

    /// Wire payload. Cheque rows ride only while the submitted flag is on.
    pub fn payload(&self, acting: ActingUser) -> Value {
        let cheques: Vec<Value> = if self.is_check_submit {
            self.cheque_details
                .iter()
                .map(|chq| {
                    json!({
                        "chequeNo": num_or_zero(&chq.cheque_no),
                        "chequeBankName": chq.cheque_bank_name,
                        "chequeBankIfscCode": chq.cheque_bank_ifsc_code,
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        json!({
            "agreementOrgId": num_or_zero(&self.agreement_org_id),
            "agreementType": self.agreement_type,
            "isCheckSubmit": self.is_check_submit,
            "chequeDetails": cheques,
            "createdBy": acting.employee_id,
            "updatedBy": acting.employee_id,
        })
    }
}
