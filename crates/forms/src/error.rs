//! Errors from the form layer.

use thiserror::Error;

use onboard_client::ClientError;
use onboard_core::error::CoreError;
use onboard_core::validation::ValidationResult;

#[derive(Debug, Error)]
pub enum FormsError {
    /// A save was attempted without a temp payroll id. Surfaced before any
    /// network call is made.
    #[error("Temp payroll id is missing")]
    MissingTempId,

    /// Local validation failed; the violations name the offending fields.
    #[error("Section validation failed with {} field error(s)", .0.errors.len())]
    Invalid(ValidationResult),

    /// CO confirmation requires a notice period.
    #[error("Notice period is required to confirm")]
    MissingNoticePeriod,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),
}
