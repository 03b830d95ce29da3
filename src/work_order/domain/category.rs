//! Client category of a work order.

use super::{ParseCategoryTypeError, WorkOrderDomainError, values::non_blank};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category discriminant as supplied by callers and stored in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    /// Work for a student client.
    Student,
    /// Work for a vendor client.
    Vendor,
    /// Anything else; described in free text.
    Other,
}

impl CategoryType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Vendor => "vendor",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CategoryType {
    type Error = ParseCategoryTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "student" => Ok(Self::Student),
            "vendor" => Ok(Self::Vendor),
            "other" => Ok(Self::Other),
            _ => Err(ParseCategoryTypeError(value.to_owned())),
        }
    }
}

/// Client category. Only [`WorkCategory::Other`] carries a description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category_type", rename_all = "snake_case")]
pub enum WorkCategory {
    /// Work for a student client.
    Student,
    /// Work for a vendor client.
    Vendor,
    /// Anything else.
    Other {
        /// Free-text description of the client category.
        description: Option<String>,
    },
}

impl WorkCategory {
    /// Builds a category from its discriminant and optional description.
    ///
    /// Blank descriptions count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::DescriptionNotAllowed`] when a
    /// non-empty description accompanies a category other than `other`.
    pub fn from_parts(
        kind: CategoryType,
        description: Option<String>,
    ) -> Result<Self, WorkOrderDomainError> {
        match (kind, description.and_then(non_blank)) {
            (CategoryType::Student, None) => Ok(Self::Student),
            (CategoryType::Vendor, None) => Ok(Self::Vendor),
            (CategoryType::Other, description) => Ok(Self::Other { description }),
            (kind, Some(_)) => Err(WorkOrderDomainError::DescriptionNotAllowed(kind)),
        }
    }

    /// Returns the category discriminant.
    #[must_use]
    pub const fn kind(&self) -> CategoryType {
        match self {
            Self::Student => CategoryType::Student,
            Self::Vendor => CategoryType::Vendor,
            Self::Other { .. } => CategoryType::Other,
        }
    }

    /// Returns the description of an `other` category, if any.
    #[must_use]
    pub fn other_description(&self) -> Option<&str> {
        match self {
            Self::Other { description } => description.as_deref(),
            Self::Student | Self::Vendor => None,
        }
    }

    /// Returns whether this is an `other` category without a description.
    #[must_use]
    pub const fn is_undescribed_other(&self) -> bool {
        matches!(self, Self::Other { description: None })
    }
}
