//! Domain logic for the employee onboarding client.
//!
//! Pure types and rules with no I/O: the workflow status enumeration and its
//! transition table, the status-driven navigation dispatcher, the wizard step
//! model, reference-data lookup and dropdown cascades, wire coercions, and the
//! per-section records with their declarative validation rules.

pub mod error;
pub mod lookup;
pub mod router;
pub mod sections;
pub mod status;
pub mod steps;
pub mod types;
pub mod validation;
pub mod wire;
