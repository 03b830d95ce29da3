//! Domain model for users and roles.
//!
//! Users are referenced by work orders but authenticated elsewhere; this
//! domain only carries what the lifecycle rules need to know about an actor.

mod error;
mod ids;
mod role;
mod user;

pub use error::{IdentityDomainError, ParseRoleError};
pub use ids::{EmailAddress, UserId, UserName};
pub use role::Role;
pub use user::{PersistedUserData, User};
