//! Operations an actor may attempt on a work order.

use super::WorkStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An operation subject to role and ownership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "status", rename_all = "snake_case")]
pub enum WorkOrderAction {
    /// Create a new work order.
    Create,
    /// Move a work order to the given status.
    Transition(WorkStatus),
    /// Change descriptive fields.
    EditDetails,
    /// Hand the work order to another marketing user.
    Reassign,
    /// Set the status directly through an administrative edit.
    OverrideStatus,
    /// Remove the work order.
    Delete,
}

impl fmt::Display for WorkOrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Transition(status) => write!(f, "transition to {status}"),
            Self::EditDetails => f.write_str("edit details"),
            Self::Reassign => f.write_str("reassign"),
            Self::OverrideStatus => f.write_str("override status"),
            Self::Delete => f.write_str("delete"),
        }
    }
}
