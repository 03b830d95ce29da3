//! Failure taxonomy shared by the service layers.
//!
//! Every service error maps onto exactly one [`FailureKind`], which is what a
//! transport layer needs to choose a status code or user-facing message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No active acting user could be resolved.
    Unauthenticated,
    /// The actor's role or ownership does not permit the operation.
    Forbidden,
    /// The referenced work order or user does not exist.
    NotFound,
    /// The requested status edge is not part of the lifecycle.
    InvalidTransition,
    /// The operation is not allowed in the record's current status.
    InvalidState,
    /// A required note (query text or cancel reason) is absent.
    MissingInput,
    /// The category and its description disagree.
    InvalidCategory,
    /// A field value is malformed.
    Validation,
    /// The write collides with an existing record.
    Conflict,
    /// Storage failed; the request may be retried by the caller.
    Internal,
}

impl FailureKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::InvalidTransition => "invalid_transition",
            Self::InvalidState => "invalid_state",
            Self::MissingInput => "missing_input",
            Self::InvalidCategory => "invalid_category",
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
