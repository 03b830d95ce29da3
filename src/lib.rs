//! Scrivener: work order tracking for a writing agency.
//!
//! Marketing staff take orders from clients, writers deliver them, and
//! administrators oversee both. Every status change and edit is gated by the
//! acting user's role and, for marketing staff, by ownership of the order.
//!
//! # Architecture
//!
//! Scrivener follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Orchestration that loads, checks, and stores records
//!
//! # Modules
//!
//! - [`identity`]: Users, roles, and acting-user resolution
//! - [`work_order`]: Work order lifecycle and role-gated transitions
//! - [`dashboard`]: Administrator totals
//! - [`failure`]: Shared failure taxonomy for callers

pub mod dashboard;
pub mod failure;
pub mod identity;
pub mod work_order;
