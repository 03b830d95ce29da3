//! Service layer for acting-user resolution and user administration.

use crate::failure::FailureKind;
use crate::identity::{
    domain::{EmailAddress, IdentityDomainError, Role, User, UserId, UserName},
    ports::{UserDirectory, UserDirectoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    name: String,
    email: String,
    role: Role,
}

impl RegisterUserRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

/// Request payload for editing a user. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    is_active: Option<bool>,
}

impl UpdateUserRequest {
    /// Creates an empty edit request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new login email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Assigns a new role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Activates or deactivates the account.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Service-level errors for identity operations.
#[derive(Debug, Error)]
pub enum IdentityServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),
    /// Directory operation failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
    /// No active user could be resolved for the request.
    #[error("request has no active acting user")]
    Unauthenticated,
    /// The actor is not an administrator.
    #[error("user {actor} with role {role} may not manage users")]
    Forbidden {
        /// Acting user.
        actor: UserId,
        /// Acting user's role.
        role: Role,
    },
    /// No user exists with the given identifier.
    #[error("user {0} not found")]
    NotFound(UserId),
}

impl IdentityServiceError {
    /// Classifies the failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Domain(_) => FailureKind::Validation,
            Self::Directory(UserDirectoryError::NotFound(_)) | Self::NotFound(_) => {
                FailureKind::NotFound
            }
            Self::Directory(
                UserDirectoryError::DuplicateUser(_) | UserDirectoryError::DuplicateEmail(_),
            ) => FailureKind::Conflict,
            Self::Directory(UserDirectoryError::Persistence(_)) => FailureKind::Internal,
            Self::Unauthenticated => FailureKind::Unauthenticated,
            Self::Forbidden { .. } => FailureKind::Forbidden,
        }
    }
}

/// Result type for identity service operations.
pub type IdentityServiceResult<T> = Result<T, IdentityServiceError>;

/// Acting-user resolution and user administration.
#[derive(Clone)]
pub struct IdentityService<R, C>
where
    R: UserDirectory,
    C: Clock + Send + Sync,
{
    directory: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> IdentityService<R, C>
where
    R: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new identity service.
    #[must_use]
    pub const fn new(directory: Arc<R>, clock: Arc<C>) -> Self {
        Self { directory, clock }
    }

    /// Resolves the user a request acts as.
    ///
    /// `None` means the transport layer could not authenticate the request.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::Unauthenticated`] when no identifier
    /// was supplied, the identifier is unknown, or the account is inactive.
    pub async fn acting_user(&self, user_id: Option<UserId>) -> IdentityServiceResult<User> {
        let Some(id) = user_id else {
            warn!("request rejected: no authenticated user");
            return Err(IdentityServiceError::Unauthenticated);
        };
        match self.directory.find_by_id(id).await? {
            Some(user) if user.is_active() => Ok(user),
            Some(_) => {
                warn!(user_id = %id, "request rejected: user is inactive");
                Err(IdentityServiceError::Unauthenticated)
            }
            None => {
                warn!(user_id = %id, "request rejected: unknown user");
                Err(IdentityServiceError::Unauthenticated)
            }
        }
    }

    /// Lists every registered user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::Forbidden`] unless the actor is an
    /// active administrator, or directory errors.
    pub async fn list_users(&self, actor: &User) -> IdentityServiceResult<Vec<User>> {
        ensure_admin(actor)?;
        Ok(self.directory.list_users().await?)
    }

    /// Registers a new active user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::Forbidden`] unless the actor is an
    /// active administrator, domain errors for an invalid name or email, or
    /// directory errors such as a duplicate email.
    pub async fn register_user(
        &self,
        actor: &User,
        request: RegisterUserRequest,
    ) -> IdentityServiceResult<User> {
        ensure_admin(actor)?;
        let name = UserName::new(request.name)?;
        let email = EmailAddress::new(request.email)?;
        if self.directory.find_by_email(&email).await?.is_some() {
            return Err(UserDirectoryError::DuplicateEmail(email).into());
        }
        let user = User::new(name, email, request.role, &*self.clock);
        self.directory.store(&user).await?;
        info!(
            actor = %actor.id(),
            user_id = %user.id(),
            role = %user.role(),
            "user registered"
        );
        Ok(user)
    }

    /// Edits a user's name, email, role, or active flag.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::Forbidden`] unless the actor is an
    /// active administrator, [`IdentityServiceError::NotFound`] for an
    /// unknown user, domain errors for invalid values, or directory errors.
    pub async fn update_user(
        &self,
        actor: &User,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> IdentityServiceResult<User> {
        ensure_admin(actor)?;
        let mut user = self
            .directory
            .find_by_id(user_id)
            .await?
            .ok_or(IdentityServiceError::NotFound(user_id))?;

        let name = request.name.map(UserName::new).transpose()?;
        let email = request.email.map(EmailAddress::new).transpose()?;

        if let Some(value) = name {
            user.rename(value, &*self.clock);
        }
        if let Some(value) = email {
            user.change_email(value, &*self.clock);
        }
        if let Some(role) = request.role {
            user.change_role(role, &*self.clock);
        }
        if let Some(is_active) = request.is_active {
            user.set_active(is_active, &*self.clock);
        }

        self.directory.update(&user).await?;
        info!(
            actor = %actor.id(),
            user_id = %user.id(),
            role = %user.role(),
            is_active = user.is_active(),
            "user updated"
        );
        Ok(user)
    }
}

fn ensure_admin(actor: &User) -> IdentityServiceResult<()> {
    if !actor.is_active() {
        return Err(IdentityServiceError::Unauthenticated);
    }
    if actor.role() != Role::Admin {
        warn!(actor = %actor.id(), role = %actor.role(), "user management rejected");
        return Err(IdentityServiceError::Forbidden {
            actor: actor.id(),
            role: actor.role(),
        });
    }
    Ok(())
}
