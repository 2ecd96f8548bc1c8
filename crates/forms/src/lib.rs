//! Stateful form layer over the domain core and REST client.
//!
//! This crate owns the screen-facing state: per-section form binding and
//! touched/error tracking, the save dispatch contract
//! (temp-id check, local validation, one upsert, no retry), the entry
//! wizard session, and the DO/CO review sessions.

pub mod cascades;
pub mod error;
pub mod form;
pub mod review;
pub mod saver;
pub mod wizard;

pub use error::FormsError;
pub use form::SectionForm;
pub use review::{ChecklistSelection, ReviewSession};
pub use wizard::WizardSession;
