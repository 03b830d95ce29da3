//! Validation strength for work order fields.

use serde::{Deserialize, Serialize};

/// Tunable validation rules whose intent was ambiguous in the workflow this
/// crate models.
///
/// # Examples
///
/// ```
/// use scrivener::work_order::domain::WorkOrderPolicy;
///
/// let policy = WorkOrderPolicy::default();
/// assert!(!policy.require_other_description_on_create);
/// assert!(policy.require_other_description_on_update);
///
/// let lenient = WorkOrderPolicy::lenient();
/// assert!(!lenient.reject_past_deadlines);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkOrderPolicy {
    /// Reject creating an `other` work order without a description.
    pub require_other_description_on_create: bool,
    /// Reject edits that leave an `other` work order without a description.
    pub require_other_description_on_update: bool,
    /// Reject deadlines before the current time on create and on edits that
    /// change the deadline.
    pub reject_past_deadlines: bool,
}

impl Default for WorkOrderPolicy {
    fn default() -> Self {
        Self {
            require_other_description_on_create: false,
            require_other_description_on_update: true,
            reject_past_deadlines: true,
        }
    }
}

impl WorkOrderPolicy {
    /// Accepts whatever the original workflow accepted.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            require_other_description_on_create: false,
            require_other_description_on_update: false,
            reject_past_deadlines: false,
        }
    }

    /// Enforces every optional rule.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            require_other_description_on_create: true,
            require_other_description_on_update: true,
            reject_past_deadlines: true,
        }
    }
}
