//! Application services for identity.

mod identity;

pub use identity::{
    IdentityService, IdentityServiceError, IdentityServiceResult, RegisterUserRequest,
    UpdateUserRequest,
};
