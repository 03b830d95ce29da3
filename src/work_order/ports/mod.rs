//! Port contracts for work orders.

pub mod repository;

pub use repository::{WorkOrderRepository, WorkOrderRepositoryError, WorkOrderRepositoryResult};
