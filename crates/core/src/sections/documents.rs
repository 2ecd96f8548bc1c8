//! Documents section: repeated uploads keyed by document-type id.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{validate_record, ActingUser};
use crate::validation::{FieldRule, ValidationResult};
use crate::wire::num_or_zero;

/// One uploaded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentItem {
    pub doc_type_id: String,
    pub doc_path: String,
    pub description: String,
}

fn item_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::required("docTypeId", "Document Type is required"),
        FieldRule::required("docPath", "Document file is required"),
    ]
}

/// The documents section form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentsForm {
    pub documents: Vec<DocumentItem>,
}

impl DocumentsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> ValidationResult {
        let rules = item_rules();
        let mut result = ValidationResult::ok();
        for (i, item) in self.documents.iter().enumerate() {
            let mut item_result = validate_record(&rules, item);
            for violation in &mut item_result.errors {
                violation.field = format!("documents[{i}].{}", violation.field);
            }
            result.merge(item_result);
        }
        result
    }

    pub fn payload(&self, acting: ActingUser) -> Value {
        json!({
            "documents": self
                .documents
                .iter()
                .map(|item| {
                    json!({
                        "docTypeId": num_or_zero(&item.doc_type_id),
                        "docPath": item.doc_path,
                        "description": item.description,
                    })
                })
                .collect::<Vec<_>>(),
            "createdBy": acting.employee_id,
            "updatedBy": acting.employee_id,
        })
    }
}
