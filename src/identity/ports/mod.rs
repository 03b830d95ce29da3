//! Port contracts for identity.

pub mod directory;

pub use directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
