//! Partial edits to a work order's descriptive fields.

use super::{CategoryType, WorkStatus};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};

/// Administrative status change carried by a [`WorkOrderPatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOverride {
    pub(super) status: WorkStatus,
    pub(super) writer_query: Option<String>,
}

impl StatusOverride {
    /// Overrides the status; a query is kept only for `has_query`.
    #[must_use]
    pub const fn new(status: WorkStatus) -> Self {
        Self {
            status,
            writer_query: None,
        }
    }

    /// Supplies the writer query required when overriding to `has_query`.
    #[must_use]
    pub fn with_writer_query(mut self, query: impl Into<String>) -> Self {
        self.writer_query = Some(query.into());
        self
    }

    /// Returns the requested status.
    #[must_use]
    pub const fn status(&self) -> WorkStatus {
        self.status
    }
}

/// Set of field changes; absent fields keep their current value.
///
/// # Examples
///
/// ```
/// use scrivener::work_order::domain::{CategoryType, WorkOrderPatch};
///
/// let patch = WorkOrderPatch::new()
///     .with_word_count(1_500)
///     .with_category(CategoryType::Other)
///     .with_other_description("Corporate newsletter");
/// assert!(!patch.is_empty());
/// assert!(WorkOrderPatch::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderPatch {
    pub(super) word_count: Option<u32>,
    pub(super) price_in_paise: Option<u64>,
    pub(super) category: Option<CategoryType>,
    pub(super) other_description: Option<String>,
    pub(super) client_name: Option<String>,
    pub(super) client_phone: Option<String>,
    pub(super) deadline: Option<DateTime<Utc>>,
    pub(super) marketing_person: Option<UserId>,
    pub(super) status: Option<StatusOverride>,
}

impl WorkOrderPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the word count.
    #[must_use]
    pub const fn with_word_count(mut self, word_count: u32) -> Self {
        self.word_count = Some(word_count);
        self
    }

    /// Sets the price in paise.
    #[must_use]
    pub const fn with_price_in_paise(mut self, paise: u64) -> Self {
        self.price_in_paise = Some(paise);
        self
    }

    /// Sets the category discriminant.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryType) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the description of an `other` category.
    #[must_use]
    pub fn with_other_description(mut self, description: impl Into<String>) -> Self {
        self.other_description = Some(description.into());
        self
    }

    /// Sets the client name.
    #[must_use]
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Sets the client phone number.
    #[must_use]
    pub fn with_client_phone(mut self, phone: impl Into<String>) -> Self {
        self.client_phone = Some(phone.into());
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Hands the work order to another marketing user. Administrators only.
    #[must_use]
    pub const fn with_marketing_person(mut self, user_id: UserId) -> Self {
        self.marketing_person = Some(user_id);
        self
    }

    /// Overrides the status. Administrators only.
    #[must_use]
    pub fn with_status_override(mut self, status: StatusOverride) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the requested new owner, if any.
    #[must_use]
    pub const fn marketing_person(&self) -> Option<UserId> {
        self.marketing_person
    }

    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count.is_none()
            && self.price_in_paise.is_none()
            && self.category.is_none()
            && self.other_description.is_none()
            && self.client_name.is_none()
            && self.client_phone.is_none()
            && self.deadline.is_none()
            && self.marketing_person.is_none()
            && self.status.is_none()
    }
}
