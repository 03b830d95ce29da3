//! Users, roles, and acting-user resolution.
//!
//! Authentication itself happens outside this crate. The transport layer
//! hands over the authenticated user identifier (or nothing), and
//! [`services::IdentityService::acting_user`] turns it into an active
//! [`domain::User`] that every work order operation takes explicitly. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
