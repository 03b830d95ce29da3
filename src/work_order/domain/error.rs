//! Error types for work order rules, validation, and parsing.

use super::{CategoryType, WorkOrderAction, WorkOrderId, WorkStatus};
use crate::failure::FailureKind;
use crate::identity::domain::{Role, UserId};
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// Which free-text note a transition requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    /// The writer's question, required on entry to `has_query`.
    WriterQuery,
    /// The reason for cancelling, required on entry to `cancelled`.
    CancelReason,
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriterQuery => f.write_str("writer query"),
            Self::CancelReason => f.write_str("cancel reason"),
        }
    }
}

/// Rejections produced by the work order lifecycle rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkOrderDomainError {
    /// The word count is zero or too large.
    #[error("invalid word count {0}, expected a positive integer")]
    InvalidWordCount(u32),

    /// The price is zero or too large.
    #[error("invalid price {0}, expected a positive amount")]
    InvalidPrice(u64),

    /// The client name is empty after trimming.
    #[error("client name must not be empty")]
    EmptyClientName,

    /// The client phone is empty after trimming.
    #[error("client phone must not be empty")]
    EmptyClientPhone,

    /// The deadline lies before the current time.
    #[error("deadline {deadline} is in the past (now {now})")]
    DeadlineInPast {
        /// Requested deadline.
        deadline: DateTime<Utc>,
        /// Clock time at validation.
        now: DateTime<Utc>,
    },

    /// A description was supplied for a category that does not take one.
    #[error("category {0} does not take a description")]
    DescriptionNotAllowed(CategoryType),

    /// An `other` category was supplied without a description.
    #[error("category other requires a description")]
    MissingOtherDescription,

    /// The new marketing owner is unknown, inactive, or not a marketing user.
    #[error("user {0} cannot own work orders")]
    InvalidAssignee(UserId),

    /// A note required by the transition is absent or blank.
    #[error("{0} must not be empty")]
    MissingInput(NoteKind),

    /// The status edge is not part of the lifecycle.
    #[error("invalid transition for work order {work_order_id}: {from} -> {to}")]
    InvalidTransition {
        /// Work order identifier.
        work_order_id: WorkOrderId,
        /// Current status.
        from: WorkStatus,
        /// Requested status.
        to: WorkStatus,
    },

    /// The operation is not allowed while the order is in its current status.
    #[error("cannot {action} work order {work_order_id} while it is {status}")]
    InvalidState {
        /// Work order identifier.
        work_order_id: WorkOrderId,
        /// Current status.
        status: WorkStatus,
        /// Rejected operation.
        action: WorkOrderAction,
    },

    /// The actor's role or ownership does not permit the operation.
    #[error("user {actor} with role {role} may not {action}")]
    Forbidden {
        /// Acting user.
        actor: UserId,
        /// Acting user's role.
        role: Role,
        /// Rejected operation.
        action: WorkOrderAction,
    },

    /// The actor's account is deactivated.
    #[error("user {0} is inactive")]
    InactiveActor(UserId),
}

impl WorkOrderDomainError {
    /// Classifies the rejection.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidWordCount(_)
            | Self::InvalidPrice(_)
            | Self::EmptyClientName
            | Self::EmptyClientPhone
            | Self::DeadlineInPast { .. }
            | Self::InvalidAssignee(_) => FailureKind::Validation,
            Self::DescriptionNotAllowed(_) | Self::MissingOtherDescription => {
                FailureKind::InvalidCategory
            }
            Self::MissingInput(_) => FailureKind::MissingInput,
            Self::InvalidTransition { .. } => FailureKind::InvalidTransition,
            Self::InvalidState { .. } => FailureKind::InvalidState,
            Self::Forbidden { .. } => FailureKind::Forbidden,
            Self::InactiveActor(_) => FailureKind::Unauthenticated,
        }
    }
}

/// Error returned while parsing work statuses from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown work status: {0}")]
pub struct ParseWorkStatusError(pub String);

/// Error returned while parsing category types from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown category type: {0}")]
pub struct ParseCategoryTypeError(pub String);
