//! In-memory user directory for tests and embedded hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{EmailAddress, User, UserId},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    users: HashMap<UserId, User>,
    registration_order: Vec<UserId>,
    email_index: HashMap<EmailAddress, UserId>,
}

impl InMemoryUserDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> UserDirectoryError {
    UserDirectoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn store(&self, user: &User) -> UserDirectoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.users.contains_key(&user.id()) {
            return Err(UserDirectoryError::DuplicateUser(user.id()));
        }
        if state.email_index.contains_key(user.email()) {
            return Err(UserDirectoryError::DuplicateEmail(user.email().clone()));
        }

        state.email_index.insert(user.email().clone(), user.id());
        state.registration_order.push(user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserDirectoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let previous_email = state
            .users
            .get(&user.id())
            .ok_or(UserDirectoryError::NotFound(user.id()))?
            .email()
            .clone();

        if let Some(owner) = state.email_index.get(user.email()) {
            if *owner != user.id() {
                return Err(UserDirectoryError::DuplicateEmail(user.email().clone()));
            }
        }

        state.email_index.remove(&previous_email);
        state.email_index.insert(user.email().clone(), user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserDirectoryResult<Option<User>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .email_index
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned())
    }

    async fn list_users(&self) -> UserDirectoryResult<Vec<User>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .registration_order
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect())
    }
}
