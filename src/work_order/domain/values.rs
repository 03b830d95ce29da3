//! Validated scalar values carried by a work order.

use super::WorkOrderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive number of words to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCount(u32);

impl WordCount {
    /// Largest word count representable in the current `PostgreSQL` schema.
    const MAX_PERSISTED_VALUE: u32 = i32::MAX.unsigned_abs();

    /// Creates a validated word count.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidWordCount`] when the value is
    /// zero or exceeds `i32::MAX`.
    pub const fn new(value: u32) -> Result<Self, WorkOrderDomainError> {
        if value == 0 || value > Self::MAX_PERSISTED_VALUE {
            return Err(WorkOrderDomainError::InvalidWordCount(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive price in Indian rupees, held in whole paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceInRs(u64);

impl PriceInRs {
    const PAISE_PER_RUPEE: u64 = 100;
    const MAX_PERSISTED_VALUE: u64 = i64::MAX.unsigned_abs();

    /// Creates a price from an amount in paise.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidPrice`] when the amount is zero
    /// or exceeds `i64::MAX`.
    pub const fn from_paise(paise: u64) -> Result<Self, WorkOrderDomainError> {
        if paise == 0 || paise > Self::MAX_PERSISTED_VALUE {
            return Err(WorkOrderDomainError::InvalidPrice(paise));
        }
        Ok(Self(paise))
    }

    /// Creates a price from a whole-rupee amount.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::InvalidPrice`] when the amount is zero
    /// or too large to hold in paise.
    pub const fn from_rupees(rupees: u64) -> Result<Self, WorkOrderDomainError> {
        match rupees.checked_mul(Self::PAISE_PER_RUPEE) {
            Some(paise) => Self::from_paise(paise),
            None => Err(WorkOrderDomainError::InvalidPrice(rupees)),
        }
    }

    /// Returns the amount in paise.
    #[must_use]
    pub const fn paise(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PriceInRs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "₹{}.{:02}",
            self.0.div_euclid(Self::PAISE_PER_RUPEE),
            self.0.rem_euclid(Self::PAISE_PER_RUPEE)
        )
    }
}

/// Name and phone number of the client who commissioned the work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientContact {
    name: String,
    phone: String,
}

impl ClientContact {
    /// Creates validated client details.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderDomainError::EmptyClientName`] or
    /// [`WorkOrderDomainError::EmptyClientPhone`] when either value is blank.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, WorkOrderDomainError> {
        Ok(Self {
            name: client_name(name)?,
            phone: client_phone(phone)?,
        })
    }

    /// Returns the client name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the client phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns a copy with the given fields replaced.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`ClientContact::new`] for replaced values.
    pub fn with_changes(
        &self,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Self, WorkOrderDomainError> {
        Ok(Self {
            name: name.map_or_else(|| Ok(self.name.clone()), client_name)?,
            phone: phone.map_or_else(|| Ok(self.phone.clone()), client_phone)?,
        })
    }
}

fn client_name(value: impl Into<String>) -> Result<String, WorkOrderDomainError> {
    non_blank(value).ok_or(WorkOrderDomainError::EmptyClientName)
}

fn client_phone(value: impl Into<String>) -> Result<String, WorkOrderDomainError> {
    non_blank(value).ok_or(WorkOrderDomainError::EmptyClientPhone)
}

/// Trims a value, returning `None` when nothing is left.
pub(crate) fn non_blank(value: impl Into<String>) -> Option<String> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
