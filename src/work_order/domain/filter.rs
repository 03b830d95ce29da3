//! Selection predicates for listing work orders.

use super::{CategoryType, WorkOrder, WorkStatus};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};

/// Conjunction of optional predicates over work orders.
///
/// An absent predicate places no constraint. The deadline bounds are
/// inclusive.
///
/// # Examples
///
/// ```
/// use scrivener::work_order::domain::{WorkOrderFilter, WorkStatus};
///
/// let filter = WorkOrderFilter::new().with_status(WorkStatus::Pending);
/// assert_eq!(filter.status(), Some(WorkStatus::Pending));
/// assert!(WorkOrderFilter::new().is_unconstrained());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkOrderFilter {
    status: Option<WorkStatus>,
    marketing_person: Option<UserId>,
    category: Option<CategoryType>,
    deadline_from: Option<DateTime<Utc>>,
    deadline_to: Option<DateTime<Utc>>,
}

impl WorkOrderFilter {
    /// Creates a filter that matches every work order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one status.
    #[must_use]
    pub const fn with_status(mut self, status: WorkStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to one owning marketing user.
    #[must_use]
    pub const fn with_marketing_person(mut self, user_id: UserId) -> Self {
        self.marketing_person = Some(user_id);
        self
    }

    /// Restricts to one category.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryType) -> Self {
        self.category = Some(category);
        self
    }

    /// Restricts to deadlines at or after `from`.
    #[must_use]
    pub const fn with_deadline_from(mut self, from: DateTime<Utc>) -> Self {
        self.deadline_from = Some(from);
        self
    }

    /// Restricts to deadlines at or before `to`.
    #[must_use]
    pub const fn with_deadline_to(mut self, to: DateTime<Utc>) -> Self {
        self.deadline_to = Some(to);
        self
    }

    /// Returns the status predicate.
    #[must_use]
    pub const fn status(&self) -> Option<WorkStatus> {
        self.status
    }

    /// Returns the owner predicate.
    #[must_use]
    pub const fn marketing_person(&self) -> Option<UserId> {
        self.marketing_person
    }

    /// Returns the category predicate.
    #[must_use]
    pub const fn category(&self) -> Option<CategoryType> {
        self.category
    }

    /// Returns the inclusive lower deadline bound.
    #[must_use]
    pub const fn deadline_from(&self) -> Option<DateTime<Utc>> {
        self.deadline_from
    }

    /// Returns the inclusive upper deadline bound.
    #[must_use]
    pub const fn deadline_to(&self) -> Option<DateTime<Utc>> {
        self.deadline_to
    }

    /// Returns whether no predicate is set.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.status.is_none()
            && self.marketing_person.is_none()
            && self.category.is_none()
            && self.deadline_from.is_none()
            && self.deadline_to.is_none()
    }

    /// Returns whether `order` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, order: &WorkOrder) -> bool {
        self.status.is_none_or(|status| order.status() == status)
            && self
                .marketing_person
                .is_none_or(|owner| order.is_owned_by(owner))
            && self
                .category
                .is_none_or(|category| order.category().kind() == category)
            && self.deadline_from.is_none_or(|from| order.deadline() >= from)
            && self.deadline_to.is_none_or(|to| order.deadline() <= to)
    }

    /// Keeps the matching orders, preserving their relative order.
    #[must_use]
    pub fn apply(&self, orders: Vec<WorkOrder>) -> Vec<WorkOrder> {
        orders
            .into_iter()
            .filter(|order| self.matches(order))
            .collect()
    }
}
