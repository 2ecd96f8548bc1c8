//! Application status enumeration and workflow transition table.
//!
//! The backend stores the status as free text; the observed spellings are
//! mapped onto a closed enum here, and every workflow move goes through an
//! explicit transition table instead of ad-hoc string comparisons.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of an onboarding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Data entry is still in progress at the campus.
    Incomplete,
    /// Submitted and awaiting divisional-office review.
    PendingAtDo,
    /// Forwarded by DO, awaiting central-office review.
    PendingAtCo,
    /// Parked for a skill-test approval decision.
    SkillTest,
    /// Terminal: application confirmed.
    Confirmed,
    /// Terminal: application rejected.
    Rejected,
    /// Terminal: employee left before confirmation.
    Left,
}

impl ApplicationStatus {
    /// Canonical server spelling, as observed on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "Incompleted",
            Self::PendingAtDo => "Pending at DO",
            Self::PendingAtCo => "Pending at CO",
            Self::SkillTest => "Skill Test",
            Self::Confirmed => "Confirm",
            Self::Rejected => "Rejected",
            Self::Left => "Left",
        }
    }

    /// Parse a status string from the server, tolerating the spelling
    /// variants the backend is known to produce.
    ///
    /// Matching is case-insensitive on the trimmed text. Any text containing
    /// `pending` resolves to `PendingAtCo` when it also mentions `co`, and
    /// otherwise falls back to `PendingAtDo` -- this mirrors the backend's
    /// historical vocabulary ("Pending at DO" / "Pending with DO") and keeps
    /// an ambiguous pending status on the DO side rather than inventing a new
    /// route. A string matching none of the known shapes is an error: an
    /// unrecognized status must fail loudly, not route somewhere by default.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let s = text.trim().to_lowercase();
        if s.contains("skill test") {
            return Ok(Self::SkillTest);
        }
        if s == "incomplete" || s == "incompleted" {
            return Ok(Self::Incomplete);
        }
        if s.contains("pending") {
            if s.contains("co") {
                return Ok(Self::PendingAtCo);
            }
            return Ok(Self::PendingAtDo);
        }
        match s.as_str() {
            "confirm" | "confirmed" | "completed" => Ok(Self::Confirmed),
            "rejected" => Ok(Self::Rejected),
            "left" => Ok(Self::Left),
            _ => Err(CoreError::UnknownStatus(text.trim().to_string())),
        }
    }

    /// Whether this status ends the workflow. Terminal rows render
    /// non-clickable in the queue.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Rejected | Self::Left)
    }

    /// Statuses this status may move to.
    ///
    /// | From         | To                                           |
    /// |--------------|----------------------------------------------|
    /// | Incomplete   | PendingAtDo (campus submits)                 |
    /// | PendingAtDo  | PendingAtCo (forward), Incomplete (back)     |
    /// | PendingAtCo  | Confirmed (confirm), PendingAtDo (reject)    |
    /// | SkillTest    | PendingAtDo (approved back into the flow)    |
    /// | terminal     | --                                           |
    pub fn allowed_transitions(&self) -> &'static [ApplicationStatus] {
        match self {
            Self::Incomplete => &[Self::PendingAtDo],
            Self::PendingAtDo => &[Self::PendingAtCo, Self::Incomplete],
            Self::PendingAtCo => &[Self::Confirmed, Self::PendingAtDo],
            Self::SkillTest => &[Self::PendingAtDo],
            Self::Confirmed | Self::Rejected | Self::Left => &[],
        }
    }

    /// Check a workflow move against the transition table.
    pub fn validate_transition(&self, to: ApplicationStatus) -> Result<(), CoreError> {
        if self.allowed_transitions().contains(&to) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self.as_str(),
                to: to.as_str(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
