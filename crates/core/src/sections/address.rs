//! Address section: current and permanent address blocks with the
//! "permanent same as current" mirror.
//!
//! While the mirror flag is on, every edit to the current block propagates
//! to the permanent block, and the submit payload's permanent block is a
//! deep copy of the current block regardless of what the stored permanent
//! block holds. Turning the flag off freezes the permanent block at its
//! last mirrored values.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{form_field, validate_record, ActingUser, PHONE_PATTERN, PIN_PATTERN};
use crate::types::RefId;
use crate::validation::{Condition, FieldRule, ValidationResult};
use crate::wire::{num_or_zero, opt_num};

/// Default country id (India) when the form leaves the field untouched.
pub const DEFAULT_COUNTRY_ID: RefId = 1;

/// One editable address block. Dropdown ids are held as strings, matching
/// form state; coercion to numbers happens in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressBlock {
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub pin: String,
    pub city_id: String,
    pub district_id: String,
    pub state_id: String,
    pub country_id: String,
    pub phone_number: String,
}

impl AddressBlock {
    fn payload(&self) -> Value {
        json!({
            "name": self.name,
            "addressLine1": self.address_line1,
            "addressLine2": self.address_line2,
            "addressLine3": self.address_line3,
            "pin": self.pin,
            "cityId": opt_num(&self.city_id),
            "districtId": opt_num(&self.district_id),
            "stateId": opt_num(&self.state_id),
            "countryId": match num_or_zero(&self.country_id) {
                0 => DEFAULT_COUNTRY_ID,
                id => id,
            },
            "phoneNumber": self.phone_number,
        })
    }

    fn from_saved(value: &Value) -> Self {
        Self {
            name: form_field(value.get("name")),
            address_line1: form_field(value.get("addressLine1")),
            address_line2: form_field(value.get("addressLine2")),
            address_line3: form_field(value.get("addressLine3")),
            pin: form_field(value.get("pin")),
            city_id: form_field(value.get("cityId")),
            district_id: form_field(value.get("districtId")),
            state_id: form_field(value.get("stateId")),
            country_id: match form_field(value.get("countryId")) {
                s if s.is_empty() => DEFAULT_COUNTRY_ID.to_string(),
                s => s,
            },
            phone_number: form_field(value.get("phoneNumber")),
        }
    }
}

/// The state/district pair resolved from a PIN code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PincodeResolution {
    pub state_id: RefId,
    pub state_name: String,
    pub district_id: RefId,
    pub district_name: String,
}

/// Which address block an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Current,
    Permanent,
}

/// The full address form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressForm {
    pub permanent_address_same: bool,
    pub current_address: AddressBlock,
    pub permanent_address: AddressBlock,
}

impl AddressForm {
    pub fn new() -> Self {
        let block = AddressBlock {
            country_id: DEFAULT_COUNTRY_ID.to_string(),
            ..AddressBlock::default()
        };
        Self {
            permanent_address_same: false,
            current_address: block.clone(),
            permanent_address: block,
        }
    }

    /// Rebuild form state from the per-section read endpoint.
    pub fn from_saved(value: &Value) -> Self {
        let same = matches!(
            value.get("permanentAddressSameAsCurrent"),
            Some(Value::Bool(true))
        );
        let current = value
            .get("currentAddress")
            .map(AddressBlock::from_saved)
            .unwrap_or_default();
        let permanent = if same {
            current.clone()
        } else {
            value
                .get("permanentAddress")
                .map(AddressBlock::from_saved)
                .unwrap_or_default()
        };
        Self {
            permanent_address_same: same,
            current_address: current,
            permanent_address: permanent,
        }
    }

    /// Toggle the mirror flag. Turning it on copies the current block over
    /// the permanent block; turning it off leaves the permanent block frozen
    /// at its last mirrored values.
    pub fn set_permanent_same(&mut self, same: bool) {
        if same {
            self.permanent_address = self.current_address.clone();
        }
        self.permanent_address_same = same;
    }

    /// Edit one block through a closure. Edits to the current block are
    /// re-mirrored onto the permanent block while the flag is on; edits to
    /// the permanent block while mirrored are ignored (the block is not
    /// independently editable in that state).
    pub fn edit(&mut self, kind: AddressKind, f: impl FnOnce(&mut AddressBlock)) {
        match kind {
            AddressKind::Current => {
                f(&mut self.current_address);
                if self.permanent_address_same {
                    self.permanent_address = self.current_address.clone();
                }
            }
            AddressKind::Permanent => {
                if !self.permanent_address_same {
                    f(&mut self.permanent_address);
                }
            }
        }
    }

    /// Apply a PIN-code resolution to a block's state and district.
    pub fn apply_pincode(&mut self, kind: AddressKind, resolved: &PincodeResolution) {
        let state = resolved.state_id.to_string();
        let district = resolved.district_id.to_string();
        self.edit(kind, |block| {
            block.state_id = state;
            block.district_id = district;
        });
    }

    /// Validation rules. The permanent block is only validated while the
    /// mirror flag is off; while it is on, the payload is a copy of the
    /// already-validated current block.
    pub fn rules() -> Vec<FieldRule> {
        let mut rules = block_rules("currentAddress");
        let off = Condition::equals("permanentAddressSame", json!(false));
        rules.extend(
            block_rules("permanentAddress")
                .into_iter()
                .map(|r| r.when(off.clone())),
        );
        rules
    }

    pub fn validate(&self) -> ValidationResult {
        validate_record(&Self::rules(), self)
    }

    /// Wire payload for the section upsert. The permanent block is a deep
    /// copy of the current block whenever the mirror flag is on.
    pub fn payload(&self, acting: ActingUser) -> Value {
        let current = self.current_address.payload();
        let permanent = if self.permanent_address_same {
            current.clone()
        } else {
            self.permanent_address.payload()
        };
        json!({
            "permanentAddressSameAsCurrent": self.permanent_address_same,
            "currentAddress": current,
            "permanentAddress": permanent,
            "createdBy": acting.employee_id,
            "updatedBy": acting.employee_id,
        })
    }
}

fn block_rules(prefix: &str) -> Vec<FieldRule> {
    let field = |name: &str| format!("{prefix}.{name}");
    vec![
        FieldRule::required(field("name"), "Name is required"),
        FieldRule::required(field("addressLine1"), "Address Line 1 is required"),
        FieldRule::required(field("pin"), "Pincode is required"),
        FieldRule::pattern(field("pin"), PIN_PATTERN, "Invalid Pincode"),
        FieldRule::required(field("cityId"), "City is required"),
        FieldRule::required(field("districtId"), "District is required"),
        FieldRule::required(field("stateId"), "State is required"),
        FieldRule::required(field("countryId"), "Country is required"),
        FieldRule::required(field("phoneNumber"), "Phone Number is required"),
        FieldRule::pattern(field("phoneNumber"), PHONE_PATTERN, "Invalid Phone Number"),
    ]
}
