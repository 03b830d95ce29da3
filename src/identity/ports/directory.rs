//! Directory port for user persistence and lookup.

use crate::identity::domain::{EmailAddress, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::DuplicateUser`] when the identifier
    /// already exists or [`UserDirectoryError::DuplicateEmail`] when another
    /// account uses the same email.
    async fn store(&self, user: &User) -> UserDirectoryResult<()>;

    /// Persists changes to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] when the user does not exist
    /// or [`UserDirectoryError::DuplicateEmail`] when the new email belongs to
    /// another account.
    async fn update(&self, user: &User) -> UserDirectoryResult<()>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>>;

    /// Finds a user by login email.
    async fn find_by_email(&self, email: &EmailAddress) -> UserDirectoryResult<Option<User>>;

    /// Returns every user in registration order.
    async fn list_users(&self) -> UserDirectoryResult<Vec<User>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// Another account already uses the email address.
    #[error("email already registered: {0}")]
    DuplicateEmail(EmailAddress),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
