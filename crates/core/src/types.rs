//! Shared scalar types.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All backend reference-data primary keys are 64-bit integers.
pub type RefId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Provisional identifier minted by the server when an application is first
/// created, before a permanent payroll record exists.
///
/// This is the correlation key for every section read and write. It is an
/// opaque token (e.g. `TEMP5370033`); the client never interprets its
/// contents, only requires it to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TempPayrollId(String);

impl TempPayrollId {
    /// Wrap a raw token, rejecting empty or whitespace-only values.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::MissingTempId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TempPayrollId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn temp_id_accepts_opaque_token() {
        let id = TempPayrollId::new("TEMP5370033").unwrap();
        assert_eq!(id.as_str(), "TEMP5370033");
    }

    #[test]
    fn temp_id_trims_whitespace() {
        let id = TempPayrollId::new("  TEMP1 ").unwrap();
        assert_eq!(id.as_str(), "TEMP1");
    }

    #[test]
    fn temp_id_rejects_empty() {
        assert_matches!(TempPayrollId::new(""), Err(CoreError::MissingTempId));
        assert_matches!(TempPayrollId::new("   "), Err(CoreError::MissingTempId));
    }

    #[test]
    fn temp_id_serializes_as_bare_string() {
        let id = TempPayrollId::new("TEMP42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"TEMP42\"");
    }
}
