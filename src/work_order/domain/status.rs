//! Work order lifecycle status.

use super::ParseWorkStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    /// Created and waiting for the writer.
    Pending,
    /// Delivered by the writer.
    Done,
    /// Blocked on a question from the writer.
    HasQuery,
    /// Withdrawn with a reason.
    Cancelled,
}

impl WorkStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Done, Self::HasQuery, Self::Cancelled];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
            Self::HasQuery => "has_query",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether no transition may leave this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    /// Returns whether `target` is a lifecycle edge from this status.
    ///
    /// Re-requesting the current status is not an edge; callers treat it as
    /// a no-op.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Done | Self::HasQuery | Self::Cancelled)
                | (Self::HasQuery, Self::Pending | Self::Done | Self::Cancelled)
        )
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WorkStatus {
    type Error = ParseWorkStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            "has_query" => Ok(Self::HasQuery),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseWorkStatusError(value.to_owned())),
        }
    }
}
