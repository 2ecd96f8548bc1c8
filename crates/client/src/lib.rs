//! Typed REST client for the employee onboarding backend.
//!
//! One [`OnboardClient`] covers the four endpoint families the screens use:
//! per-section reads and upserts keyed by temp payroll id, the DO/CO
//! workflow transitions, reference dropdown lists, and the PIN-code lookup
//! service.

pub mod config;
pub mod employee;
pub mod error;
pub mod http;
pub mod pincode;
pub mod reference;
pub mod workflow;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::OnboardClient;
