//! Work order management.
//!
//! Marketing users create work orders and may cancel the ones they own,
//! writers deliver them or raise queries, and administrators correct any
//! of them. The status graph is
//!
//! ```text
//! pending  -> done | has_query | cancelled
//! has_query -> pending | done | cancelled
//! ```
//!
//! with `done` and `cancelled` terminal. The module follows the hexagonal
//! layout used throughout the crate: domain types, ports, adapters, and
//! services.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
