//! Service layer for the role-gated work order lifecycle.

use crate::failure::FailureKind;
use crate::identity::{
    domain::{Role, User, UserId},
    ports::{UserDirectory, UserDirectoryError},
};
use crate::work_order::{
    domain::{
        CategoryType, ChangeOutcome, ClientContact, PriceInRs, WordCount, WorkCategory, WorkOrder,
        WorkOrderCapabilities, WorkOrderDetails, WorkOrderDomainError, WorkOrderFilter,
        WorkOrderId, WorkOrderPatch, WorkOrderPolicy, WorkStatus,
    },
    ports::{WorkOrderRepository, WorkOrderRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a work order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWorkOrderRequest {
    word_count: u32,
    price_in_paise: u64,
    category: CategoryType,
    other_description: Option<String>,
    client_name: String,
    client_phone: String,
    deadline: DateTime<Utc>,
}

impl CreateWorkOrderRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        word_count: u32,
        price_in_paise: u64,
        category: CategoryType,
        client_name: impl Into<String>,
        client_phone: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            word_count,
            price_in_paise,
            category,
            other_description: None,
            client_name: client_name.into(),
            client_phone: client_phone.into(),
            deadline,
        }
    }

    /// Describes an `other` category.
    #[must_use]
    pub fn with_other_description(mut self, description: impl Into<String>) -> Self {
        self.other_description = Some(description.into());
        self
    }

    fn into_details(self) -> Result<WorkOrderDetails, WorkOrderDomainError> {
        Ok(WorkOrderDetails {
            word_count: WordCount::new(self.word_count)?,
            price: PriceInRs::from_paise(self.price_in_paise)?,
            category: WorkCategory::from_parts(self.category, self.other_description)?,
            client: ClientContact::new(self.client_name, self.client_phone)?,
            deadline: self.deadline,
        })
    }
}

/// Request payload for a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionWorkOrderRequest {
    work_order_id: WorkOrderId,
    target: WorkStatus,
    note: Option<String>,
}

impl TransitionWorkOrderRequest {
    /// Creates a transition request without a note.
    #[must_use]
    pub const fn new(work_order_id: WorkOrderId, target: WorkStatus) -> Self {
        Self {
            work_order_id,
            target,
            note: None,
        }
    }

    /// Attaches the writer query or cancel reason the target status needs.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A listed work order together with what the requesting actor may do to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderListing {
    /// The work order.
    pub order: WorkOrder,
    /// Writes the actor may attempt.
    pub capabilities: WorkOrderCapabilities,
}

/// Service-level errors for work order lifecycle operations.
#[derive(Debug, Error)]
pub enum WorkOrderLifecycleError {
    /// A lifecycle rule rejected the request.
    #[error(transparent)]
    Domain(#[from] WorkOrderDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkOrderRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
    /// No work order exists with the given identifier.
    #[error("work order {0} not found")]
    NotFound(WorkOrderId),
    /// No user exists with the given identifier.
    #[error("user {0} not found")]
    UnknownUser(UserId),
}

impl WorkOrderLifecycleError {
    /// Classifies the failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Repository(WorkOrderRepositoryError::NotFound(_))
            | Self::NotFound(_)
            | Self::UnknownUser(_) => FailureKind::NotFound,
            Self::Repository(
                WorkOrderRepositoryError::DuplicateWorkOrder(_)
                | WorkOrderRepositoryError::DuplicateWorkCode(_),
            ) => FailureKind::Conflict,
            Self::Repository(WorkOrderRepositoryError::Persistence(_)) | Self::Directory(_) => {
                FailureKind::Internal
            }
        }
    }
}

/// Result type for work order lifecycle service operations.
pub type WorkOrderLifecycleResult<T> = Result<T, WorkOrderLifecycleError>;

/// Work order lifecycle orchestration service.
///
/// Every operation takes the acting user explicitly; resolve it with
/// [`IdentityService::acting_user`](crate::identity::services::IdentityService::acting_user).
#[derive(Clone)]
pub struct WorkOrderLifecycleService<R, U, C>
where
    R: WorkOrderRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<U>,
    clock: Arc<C>,
    policy: WorkOrderPolicy,
}

impl<R, U, C> WorkOrderLifecycleService<R, U, C>
where
    R: WorkOrderRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service with the default policy.
    #[must_use]
    pub fn new(repository: Arc<R>, directory: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            clock,
            policy: WorkOrderPolicy::default(),
        }
    }

    /// Replaces the validation policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: WorkOrderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active validation policy.
    #[must_use]
    pub const fn policy(&self) -> &WorkOrderPolicy {
        &self.policy
    }

    /// Creates a pending work order owned by the acting marketing user.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderLifecycleError::Domain`] when the actor may not
    /// create work orders or a field is invalid, and
    /// [`WorkOrderLifecycleError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        actor: &User,
        request: CreateWorkOrderRequest,
    ) -> WorkOrderLifecycleResult<WorkOrder> {
        let result = self.create_inner(actor, request).await;
        result.inspect_err(|err| log_rejection(actor, "create", err))
    }

    async fn create_inner(
        &self,
        actor: &User,
        request: CreateWorkOrderRequest,
    ) -> WorkOrderLifecycleResult<WorkOrder> {
        WorkOrder::ensure_creatable_by(actor)?;
        let details = request.into_details()?;
        let order = WorkOrder::create(actor, details, &self.policy, &*self.clock)?;
        self.repository.store(&order).await?;
        info!(
            actor = %actor.id(),
            work_order_id = %order.id(),
            work_code = %order.work_code(),
            "work order created"
        );
        Ok(order)
    }

    /// Fetches one work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderLifecycleError::NotFound`] for an unknown
    /// identifier, or a domain error when the actor is inactive.
    pub async fn get(&self, actor: &User, id: WorkOrderId) -> WorkOrderLifecycleResult<WorkOrder> {
        ensure_active(actor)?;
        self.load(id).await
    }

    /// Lists the work orders matching `filter` in creation order.
    ///
    /// Every role sees every order; mutation is restricted separately.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the actor is inactive, or repository
    /// errors.
    pub async fn list(
        &self,
        actor: &User,
        filter: &WorkOrderFilter,
    ) -> WorkOrderLifecycleResult<Vec<WorkOrder>> {
        ensure_active(actor)?;
        Ok(self.repository.list(filter).await?)
    }

    /// Lists matching work orders with the actor's capabilities on each.
    ///
    /// # Errors
    ///
    /// See [`WorkOrderLifecycleService::list`].
    pub async fn list_with_capabilities(
        &self,
        actor: &User,
        filter: &WorkOrderFilter,
    ) -> WorkOrderLifecycleResult<Vec<WorkOrderListing>> {
        let orders = self.list(actor, filter).await?;
        Ok(orders
            .into_iter()
            .map(|order| {
                let capabilities = WorkOrderCapabilities::evaluate(&order, actor);
                WorkOrderListing {
                    order,
                    capabilities,
                }
            })
            .collect())
    }

    /// Moves a work order to another status.
    ///
    /// Nothing is written when the request is rejected or changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderLifecycleError::NotFound`] for an unknown order and
    /// the domain errors of [`WorkOrder::request_transition`].
    pub async fn transition(
        &self,
        actor: &User,
        request: TransitionWorkOrderRequest,
    ) -> WorkOrderLifecycleResult<WorkOrder> {
        let result = self.transition_inner(actor, request).await;
        result.inspect_err(|err| log_rejection(actor, "transition", err))
    }

    async fn transition_inner(
        &self,
        actor: &User,
        request: TransitionWorkOrderRequest,
    ) -> WorkOrderLifecycleResult<WorkOrder> {
        let mut order = self.load(request.work_order_id).await?;
        let from = order.status();
        let outcome = order.request_transition(
            actor,
            request.target,
            request.note.as_deref(),
            &*self.clock,
        )?;

        if outcome == ChangeOutcome::Unchanged {
            debug!(
                actor = %actor.id(),
                work_order_id = %order.id(),
                status = %from,
                "transition to current status ignored"
            );
            return Ok(order);
        }

        self.repository.update(&order).await?;
        info!(
            actor = %actor.id(),
            role = %actor.role(),
            work_order_id = %order.id(),
            from = %from,
            to = %order.status(),
            "work order transitioned"
        );
        Ok(order)
    }

    /// Edits descriptive fields, and for administrators reassigns the order
    /// or overrides its status.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderLifecycleError::NotFound`] for an unknown order,
    /// [`WorkOrderLifecycleError::UnknownUser`] for an unknown new owner,
    /// [`WorkOrderDomainError::InvalidAssignee`] when the new owner is not an
    /// active marketing user, and the domain errors of
    /// [`WorkOrder::apply_patch`].
    pub async fn update_details(
        &self,
        actor: &User,
        id: WorkOrderId,
        patch: WorkOrderPatch,
    ) -> WorkOrderLifecycleResult<WorkOrder> {
        let result = self.update_details_inner(actor, id, patch).await;
        result.inspect_err(|err| log_rejection(actor, "update", err))
    }

    async fn update_details_inner(
        &self,
        actor: &User,
        id: WorkOrderId,
        patch: WorkOrderPatch,
    ) -> WorkOrderLifecycleResult<WorkOrder> {
        let mut order = self.load(id).await?;
        order.ensure_editable_by(actor, &patch)?;
        if let Some(assignee) = patch.marketing_person() {
            let candidate = self
                .directory
                .find_by_id(assignee)
                .await?
                .ok_or(WorkOrderLifecycleError::UnknownUser(assignee))?;
            if !candidate.is_active() || candidate.role() != Role::Marketing {
                return Err(WorkOrderDomainError::InvalidAssignee(assignee).into());
            }
        }

        let outcome = order.apply_patch(actor, patch, &self.policy, &*self.clock)?;
        if outcome == ChangeOutcome::Unchanged {
            debug!(actor = %actor.id(), work_order_id = %id, "empty work order edit ignored");
            return Ok(order);
        }

        self.repository.update(&order).await?;
        info!(
            actor = %actor.id(),
            work_order_id = %id,
            status = %order.status(),
            marketing_person_id = %order.marketing_person_id(),
            "work order updated"
        );
        Ok(order)
    }

    /// Deletes a work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderLifecycleError::NotFound`] for an unknown order and
    /// [`WorkOrderDomainError::Forbidden`] unless the actor is an active
    /// administrator.
    pub async fn delete(&self, actor: &User, id: WorkOrderId) -> WorkOrderLifecycleResult<()> {
        let result = self.delete_inner(actor, id).await;
        result.inspect_err(|err| log_rejection(actor, "delete", err))
    }

    async fn delete_inner(&self, actor: &User, id: WorkOrderId) -> WorkOrderLifecycleResult<()> {
        let order = self.load(id).await?;
        order.ensure_deletable_by(actor)?;
        self.repository.delete(id).await?;
        info!(
            actor = %actor.id(),
            work_order_id = %id,
            work_code = %order.work_code(),
            "work order deleted"
        );
        Ok(())
    }

    async fn load(&self, id: WorkOrderId) -> WorkOrderLifecycleResult<WorkOrder> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(WorkOrderLifecycleError::NotFound(id))
    }
}

const fn ensure_active(actor: &User) -> Result<(), WorkOrderDomainError> {
    if actor.is_active() {
        Ok(())
    } else {
        Err(WorkOrderDomainError::InactiveActor(actor.id()))
    }
}

fn log_rejection(actor: &User, operation: &'static str, err: &WorkOrderLifecycleError) {
    warn!(
        actor = %actor.id(),
        role = %actor.role(),
        operation,
        kind = %err.kind(),
        error = %err,
        "work order request rejected"
    );
}
