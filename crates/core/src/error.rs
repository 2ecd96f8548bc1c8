//! Error type shared across the domain modules.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The temp payroll id is required for the operation but absent.
    #[error("Temp payroll id is missing")]
    MissingTempId,

    /// A status string from the server matched no known status.
    #[error("Unrecognized application status '{0}'")]
    UnknownStatus(String),

    /// A workflow transition the transition table does not allow.
    #[error("Invalid status transition from '{from}' to '{to}'")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// A generic validation failure with a human-readable message.
    #[error("Validation failed: {0}")]
    Validation(String),
}
