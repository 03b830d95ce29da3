//! Work order aggregate root and its lifecycle rules.

use super::{
    CategoryType, ClientContact, NoteKind, PriceInRs, StatusOverride, WordCount, WorkCategory,
    WorkCode, WorkOrderAction, WorkOrderDomainError, WorkOrderId, WorkOrderPatch,
    WorkOrderPolicy, WorkStatus, values::non_blank,
};
use crate::identity::domain::{Role, User, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated descriptive fields of a new work order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderDetails {
    /// Number of words to write.
    pub word_count: WordCount,
    /// Agreed price.
    pub price: PriceInRs,
    /// Client category.
    pub category: WorkCategory,
    /// Client contact details.
    pub client: ClientContact,
    /// Delivery deadline.
    pub deadline: DateTime<Utc>,
}

/// Whether a request changed the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The record was modified and must be persisted.
    Applied,
    /// The request was valid but changed nothing.
    Unchanged,
}

/// Work order aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    id: WorkOrderId,
    work_code: WorkCode,
    marketing_person_id: UserId,
    category: WorkCategory,
    word_count: WordCount,
    price: PriceInRs,
    client: ClientContact,
    deadline: DateTime<Utc>,
    status: WorkStatus,
    marketing_cancel_reason: Option<String>,
    writer_query: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted work order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedWorkOrderData {
    /// Persisted identifier.
    pub id: WorkOrderId,
    /// Persisted work code.
    pub work_code: WorkCode,
    /// Owning marketing user.
    pub marketing_person_id: UserId,
    /// Persisted category.
    pub category: WorkCategory,
    /// Persisted word count.
    pub word_count: WordCount,
    /// Persisted price.
    pub price: PriceInRs,
    /// Persisted client details.
    pub client: ClientContact,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted status.
    pub status: WorkStatus,
    /// Reason recorded at cancellation.
    pub marketing_cancel_reason: Option<String>,
    /// Open writer query.
    pub writer_query: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Result of the permission and legality checks for a status request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionCheck {
    Edge,
    NoOp,
}

impl WorkOrder {
    /// Creates a pending work order owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::Forbidden`] unless `owner` is an active
    /// marketing user, and policy-dependent
    /// [`WorkOrderDomainError::MissingOtherDescription`] or
    /// [`WorkOrderDomainError::DeadlineInPast`].
    pub fn create(
        owner: &User,
        details: WorkOrderDetails,
        policy: &WorkOrderPolicy,
        clock: &impl Clock,
    ) -> Result<Self, WorkOrderDomainError> {
        Self::ensure_creatable_by(owner)?;
        if policy.require_other_description_on_create && details.category.is_undescribed_other()
        {
            return Err(WorkOrderDomainError::MissingOtherDescription);
        }
        let timestamp = clock.utc();
        ensure_deadline(details.deadline, timestamp, policy)?;

        let id = WorkOrderId::new();
        Ok(Self {
            id,
            work_code: WorkCode::generate(id, timestamp),
            marketing_person_id: owner.id(),
            category: details.category,
            word_count: details.word_count,
            price: details.price,
            client: details.client,
            deadline: details.deadline,
            status: WorkStatus::Pending,
            marketing_cancel_reason: None,
            writer_query: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Checks that `owner` may create work orders.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::Forbidden`] unless `owner` is an active
    /// marketing user.
    pub fn ensure_creatable_by(owner: &User) -> Result<(), WorkOrderDomainError> {
        ensure_active(owner)?;
        if owner.role() != Role::Marketing {
            return Err(forbidden(owner, WorkOrderAction::Create));
        }
        Ok(())
    }

    /// Reconstructs a work order from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedWorkOrderData) -> Self {
        Self {
            id: data.id,
            work_code: data.work_code,
            marketing_person_id: data.marketing_person_id,
            category: data.category,
            word_count: data.word_count,
            price: data.price,
            client: data.client,
            deadline: data.deadline,
            status: data.status,
            marketing_cancel_reason: data.marketing_cancel_reason,
            writer_query: data.writer_query,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the work order identifier.
    #[must_use]
    pub const fn id(&self) -> WorkOrderId {
        self.id
    }

    /// Returns the human-readable work code.
    #[must_use]
    pub const fn work_code(&self) -> &WorkCode {
        &self.work_code
    }

    /// Returns the owning marketing user.
    #[must_use]
    pub const fn marketing_person_id(&self) -> UserId {
        self.marketing_person_id
    }

    /// Returns the client category.
    #[must_use]
    pub const fn category(&self) -> &WorkCategory {
        &self.category
    }

    /// Returns the word count.
    #[must_use]
    pub const fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// Returns the price.
    #[must_use]
    pub const fn price(&self) -> PriceInRs {
        self.price
    }

    /// Returns the client contact details.
    #[must_use]
    pub const fn client(&self) -> &ClientContact {
        &self.client
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> WorkStatus {
        self.status
    }

    /// Returns the cancellation reason, if the order was cancelled.
    #[must_use]
    pub fn marketing_cancel_reason(&self) -> Option<&str> {
        self.marketing_cancel_reason.as_deref()
    }

    /// Returns the open writer query, if the order is in `has_query`.
    #[must_use]
    pub fn writer_query(&self) -> Option<&str> {
        self.writer_query.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether `user_id` owns this work order.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.marketing_person_id == user_id
    }

    /// Returns whether `actor` may move this order to `target` as a real
    /// lifecycle edge, ignoring note requirements.
    #[must_use]
    pub fn permits_transition(&self, actor: &User, target: WorkStatus) -> bool {
        matches!(
            self.check_transition(actor, target),
            Ok(TransitionCheck::Edge)
        )
    }

    /// Moves the work order along a lifecycle edge.
    ///
    /// Entering `has_query` records `note` as the writer query; entering
    /// `cancelled` records it as the cancel reason. Every other edge ignores
    /// `note`. Leaving `has_query` clears the writer query. Re-requesting the
    /// current status changes nothing once the actor is shown to be allowed
    /// to act on status.
    ///
    /// The record is untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidState`] from a terminal status,
    /// [`WorkOrderDomainError::InvalidTransition`] for an edge outside the
    /// lifecycle, [`WorkOrderDomainError::Forbidden`] for a role or ownership
    /// violation, and [`WorkOrderDomainError::MissingInput`] when the edge
    /// requires a note and none was supplied.
    pub fn request_transition(
        &mut self,
        actor: &User,
        target: WorkStatus,
        note: Option<&str>,
        clock: &impl Clock,
    ) -> Result<ChangeOutcome, WorkOrderDomainError> {
        if self.check_transition(actor, target)? == TransitionCheck::NoOp {
            return Ok(ChangeOutcome::Unchanged);
        }

        let text = note.and_then(non_blank);
        match target {
            WorkStatus::HasQuery => {
                let query = text.ok_or(WorkOrderDomainError::MissingInput(NoteKind::WriterQuery))?;
                self.writer_query = Some(query);
            }
            WorkStatus::Cancelled => {
                let reason =
                    text.ok_or(WorkOrderDomainError::MissingInput(NoteKind::CancelReason))?;
                self.marketing_cancel_reason = Some(reason);
                self.writer_query = None;
            }
            WorkStatus::Pending | WorkStatus::Done => self.writer_query = None,
        }
        self.status = target;
        self.touch(clock);
        Ok(ChangeOutcome::Applied)
    }

    /// Applies an edit to descriptive fields.
    ///
    /// Administrators may edit any order, reassign it, and override its
    /// status. The owning marketing user may edit descriptive fields unless
    /// the order is cancelled. All values are validated before anything is
    /// written, so the record is untouched when an error is returned.
    ///
    /// The new owner in [`WorkOrderPatch::marketing_person`] is taken as
    /// given; callers check that it names an active marketing user.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::Forbidden`] for role or ownership
    /// violations, [`WorkOrderDomainError::InvalidState`] when a marketing
    /// user edits a cancelled order or a status override targets a cancelled
    /// order, category errors, field validation errors, and the transition
    /// errors of a status override.
    pub fn apply_patch(
        &mut self,
        actor: &User,
        patch: WorkOrderPatch,
        policy: &WorkOrderPolicy,
        clock: &impl Clock,
    ) -> Result<ChangeOutcome, WorkOrderDomainError> {
        self.check_edit(actor, &patch)?;
        if patch.is_empty() {
            return Ok(ChangeOutcome::Unchanged);
        }

        let now = clock.utc();
        let word_count = patch.word_count.map(WordCount::new).transpose()?;
        let price = patch.price_in_paise.map(PriceInRs::from_paise).transpose()?;
        let client = if patch.client_name.is_some() || patch.client_phone.is_some() {
            Some(
                self.client
                    .with_changes(patch.client_name.as_deref(), patch.client_phone.as_deref())?,
            )
        } else {
            None
        };
        let category = self.patched_category(&patch, policy)?;
        if let Some(deadline) = patch.deadline {
            ensure_deadline(deadline, now, policy)?;
        }
        let status_change = patch
            .status
            .map(|status_override| self.resolve_override(status_override))
            .transpose()?;

        if let Some(value) = word_count {
            self.word_count = value;
        }
        if let Some(value) = price {
            self.price = value;
        }
        if let Some(value) = client {
            self.client = value;
        }
        if let Some(value) = category {
            self.category = value;
        }
        if let Some(value) = patch.deadline {
            self.deadline = value;
        }
        if let Some(value) = patch.marketing_person {
            self.marketing_person_id = value;
        }
        if let Some((status, writer_query)) = status_change {
            self.status = status;
            self.writer_query = writer_query;
        }
        self.updated_at = now;
        Ok(ChangeOutcome::Applied)
    }

    /// Checks that `actor` may delete this work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::Forbidden`] unless the actor is an
    /// active administrator.
    pub fn ensure_deletable_by(&self, actor: &User) -> Result<(), WorkOrderDomainError> {
        ensure_active(actor)?;
        if actor.role() != Role::Admin {
            return Err(forbidden(actor, WorkOrderAction::Delete));
        }
        Ok(())
    }

    /// Checks that `actor` may edit this order with `patch`.
    ///
    /// # Errors
    ///
    /// See [`WorkOrder::apply_patch`].
    pub fn ensure_editable_by(
        &self,
        actor: &User,
        patch: &WorkOrderPatch,
    ) -> Result<(), WorkOrderDomainError> {
        self.check_edit(actor, patch)
    }

    fn check_transition(
        &self,
        actor: &User,
        target: WorkStatus,
    ) -> Result<TransitionCheck, WorkOrderDomainError> {
        ensure_active(actor)?;
        let action = WorkOrderAction::Transition(target);
        if self.status.is_terminal() {
            return Err(WorkOrderDomainError::InvalidState {
                work_order_id: self.id,
                status: self.status,
                action,
            });
        }
        if target == self.status {
            return if matches!(actor.role(), Role::Writer | Role::Admin) {
                Ok(TransitionCheck::NoOp)
            } else {
                Err(forbidden(actor, action))
            };
        }
        if !self.status.can_transition_to(target) {
            return Err(WorkOrderDomainError::InvalidTransition {
                work_order_id: self.id,
                from: self.status,
                to: target,
            });
        }

        let permitted = match (actor.role(), target) {
            (Role::Admin, _)
            | (Role::Writer, WorkStatus::Pending | WorkStatus::Done | WorkStatus::HasQuery) => {
                true
            }
            (Role::Marketing, WorkStatus::Cancelled) => self.is_owned_by(actor.id()),
            (Role::Writer, WorkStatus::Cancelled)
            | (Role::Marketing, WorkStatus::Pending | WorkStatus::Done | WorkStatus::HasQuery) => {
                false
            }
        };
        if !permitted {
            return Err(forbidden(actor, action));
        }
        Ok(TransitionCheck::Edge)
    }

    fn check_edit(&self, actor: &User, patch: &WorkOrderPatch) -> Result<(), WorkOrderDomainError> {
        ensure_active(actor)?;
        match actor.role() {
            Role::Admin => Ok(()),
            Role::Marketing if self.is_owned_by(actor.id()) => {
                if patch.marketing_person.is_some() {
                    return Err(forbidden(actor, WorkOrderAction::Reassign));
                }
                if patch.status.is_some() {
                    return Err(forbidden(actor, WorkOrderAction::OverrideStatus));
                }
                if self.status == WorkStatus::Cancelled {
                    return Err(WorkOrderDomainError::InvalidState {
                        work_order_id: self.id,
                        status: self.status,
                        action: WorkOrderAction::EditDetails,
                    });
                }
                Ok(())
            }
            Role::Marketing | Role::Writer => Err(forbidden(actor, WorkOrderAction::EditDetails)),
        }
    }

    fn patched_category(
        &self,
        patch: &WorkOrderPatch,
        policy: &WorkOrderPolicy,
    ) -> Result<Option<WorkCategory>, WorkOrderDomainError> {
        if patch.category.is_none() && patch.other_description.is_none() {
            return Ok(None);
        }
        let kind = patch.category.unwrap_or_else(|| self.category.kind());
        let description = match (&patch.other_description, kind) {
            (Some(description), _) => Some(description.clone()),
            (None, CategoryType::Other) => self.category.other_description().map(str::to_owned),
            (None, CategoryType::Student | CategoryType::Vendor) => None,
        };
        let category = WorkCategory::from_parts(kind, description)?;
        if policy.require_other_description_on_update && category.is_undescribed_other() {
            return Err(WorkOrderDomainError::MissingOtherDescription);
        }
        Ok(Some(category))
    }

    fn resolve_override(
        &self,
        status_override: StatusOverride,
    ) -> Result<(WorkStatus, Option<String>), WorkOrderDomainError> {
        let target = status_override.status;
        if self.status == WorkStatus::Cancelled {
            return Err(WorkOrderDomainError::InvalidState {
                work_order_id: self.id,
                status: self.status,
                action: WorkOrderAction::OverrideStatus,
            });
        }
        match target {
            WorkStatus::Cancelled => Err(WorkOrderDomainError::InvalidTransition {
                work_order_id: self.id,
                from: self.status,
                to: target,
            }),
            WorkStatus::HasQuery => {
                let query = status_override
                    .writer_query
                    .and_then(non_blank)
                    .or_else(|| self.writer_query.clone())
                    .ok_or(WorkOrderDomainError::MissingInput(NoteKind::WriterQuery))?;
                Ok((target, Some(query)))
            }
            WorkStatus::Pending | WorkStatus::Done => Ok((target, None)),
        }
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

const fn ensure_active(actor: &User) -> Result<(), WorkOrderDomainError> {
    if actor.is_active() {
        Ok(())
    } else {
        Err(WorkOrderDomainError::InactiveActor(actor.id()))
    }
}

fn ensure_deadline(
    deadline: DateTime<Utc>,
    now: DateTime<Utc>,
    policy: &WorkOrderPolicy,
) -> Result<(), WorkOrderDomainError> {
    if policy.reject_past_deadlines && deadline < now {
        return Err(WorkOrderDomainError::DeadlineInPast { deadline, now });
    }
    Ok(())
}

const fn forbidden(actor: &User, action: WorkOrderAction) -> WorkOrderDomainError {
    WorkOrderDomainError::Forbidden {
        actor: actor.id(),
        role: actor.role(),
        action,
    }
}
