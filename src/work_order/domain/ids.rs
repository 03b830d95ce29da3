//! Identifier types for the work order domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkOrderId(Uuid);

impl WorkOrderId {
    /// Creates a new random work order identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a work order identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for WorkOrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for WorkOrderId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for WorkOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable work order label, e.g. `WRK-20261016-1A2B3C4D`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkCode(String);

impl WorkCode {
    /// Prefix shared by every generated code.
    pub const PREFIX: &'static str = "WRK";

    /// Derives the code for a work order from its identifier and creation
    /// time.
    #[must_use]
    pub fn generate(id: WorkOrderId, created_at: DateTime<Utc>) -> Self {
        let simple = id.into_inner().simple().to_string().to_ascii_uppercase();
        let suffix: String = simple.chars().take(8).collect();
        Self(format!(
            "{}-{}-{suffix}",
            Self::PREFIX,
            created_at.format("%Y%m%d")
        ))
    }

    /// Wraps a code loaded from storage.
    #[must_use]
    pub fn from_persisted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WorkCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WorkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
