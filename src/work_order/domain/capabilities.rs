//! Per-actor summary of the writes a work order currently admits.

use super::{WorkOrder, WorkStatus};
use crate::identity::domain::{Role, User};
use serde::{Deserialize, Serialize};

/// What an actor may attempt on one work order.
///
/// Transitions are listed only for real lifecycle edges; re-requesting the
/// current status is never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderCapabilities {
    /// Statuses the actor may move the order to.
    pub transitions: Vec<WorkStatus>,
    /// Whether the actor may edit descriptive fields.
    pub can_edit_details: bool,
    /// Whether the actor may hand the order to another marketing user.
    pub can_reassign: bool,
    /// Whether the actor may set the status through an edit.
    pub can_override_status: bool,
    /// Whether the actor may delete the order.
    pub can_delete: bool,
}

impl WorkOrderCapabilities {
    /// Evaluates the lifecycle rules for `actor` against `order`.
    #[must_use]
    pub fn evaluate(order: &WorkOrder, actor: &User) -> Self {
        if !actor.is_active() {
            return Self::none();
        }
        let transitions = WorkStatus::ALL
            .into_iter()
            .filter(|target| order.permits_transition(actor, *target))
            .collect();
        let is_admin = actor.role() == Role::Admin;
        let owns_live_order = actor.role() == Role::Marketing
            && order.is_owned_by(actor.id())
            && order.status() != WorkStatus::Cancelled;
        Self {
            transitions,
            can_edit_details: is_admin || owns_live_order,
            can_reassign: is_admin,
            can_override_status: is_admin && order.status() != WorkStatus::Cancelled,
            can_delete: is_admin,
        }
    }

    const fn none() -> Self {
        Self {
            transitions: Vec::new(),
            can_edit_details: false,
            can_reassign: false,
            can_override_status: false,
            can_delete: false,
        }
    }
}
