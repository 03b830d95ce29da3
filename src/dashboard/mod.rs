//! Administrator overview of head counts and work order volume.

use crate::failure::FailureKind;
use crate::identity::{
    domain::{Role, User, UserId},
    ports::{UserDirectory, UserDirectoryError},
};
use crate::work_order::ports::{WorkOrderRepository, WorkOrderRepositoryError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Totals shown on the administrator dashboard.
///
/// User counts include inactive accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of administrators.
    pub admins: u64,
    /// Number of marketing users.
    pub marketing: u64,
    /// Number of writers.
    pub writers: u64,
    /// Number of stored work orders.
    pub total_work_orders: u64,
}

/// Errors returned while building the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The actor is inactive.
    #[error("user {0} is inactive")]
    InactiveActor(UserId),
    /// The actor is not an administrator.
    #[error("user {actor} with role {role} may not view the dashboard")]
    Forbidden {
        /// Acting user.
        actor: UserId,
        /// Acting user's role.
        role: Role,
    },
    /// User lookup failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
    /// Work order lookup failed.
    #[error(transparent)]
    Repository(#[from] WorkOrderRepositoryError),
}

impl DashboardError {
    /// Classifies the failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InactiveActor(_) => FailureKind::Unauthenticated,
            Self::Forbidden { .. } => FailureKind::Forbidden,
            Self::Directory(_) | Self::Repository(_) => FailureKind::Internal,
        }
    }
}

/// Builds the administrator dashboard.
#[derive(Clone)]
pub struct DashboardService<U, W>
where
    U: UserDirectory,
    W: WorkOrderRepository,
{
    directory: Arc<U>,
    work_orders: Arc<W>,
}

impl<U, W> DashboardService<U, W>
where
    U: UserDirectory,
    W: WorkOrderRepository,
{
    /// Creates a dashboard service.
    #[must_use]
    pub const fn new(directory: Arc<U>, work_orders: Arc<W>) -> Self {
        Self {
            directory,
            work_orders,
        }
    }

    /// Counts users per role and stored work orders.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Forbidden`] unless the actor is an
    /// administrator, [`DashboardError::InactiveActor`] for a deactivated
    /// actor, or lookup errors.
    pub async fn summary(&self, actor: &User) -> Result<DashboardSummary, DashboardError> {
        if !actor.is_active() {
            return Err(DashboardError::InactiveActor(actor.id()));
        }
        if actor.role() != Role::Admin {
            warn!(actor = %actor.id(), role = %actor.role(), "dashboard request rejected");
            return Err(DashboardError::Forbidden {
                actor: actor.id(),
                role: actor.role(),
            });
        }

        let mut summary = DashboardSummary {
            total_work_orders: self.work_orders.count().await?,
            ..DashboardSummary::default()
        };
        for user in self.directory.list_users().await? {
            let slot = match user.role() {
                Role::Admin => &mut summary.admins,
                Role::Marketing => &mut summary.marketing,
                Role::Writer => &mut summary.writers,
            };
            *slot += 1;
        }
        Ok(summary)
    }
}
