//! User roles.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned to a user; determines which operations they may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Oversees and corrects every work order and manages users.
    Admin,
    /// Creates work orders and cancels the ones they own.
    Marketing,
    /// Executes work orders and raises queries against them.
    Writer,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Marketing, Self::Writer];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Marketing => "marketing",
            Self::Writer => "writer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "marketing" => Ok(Self::Marketing),
            "writer" => Ok(Self::Writer),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
