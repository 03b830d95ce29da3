//! Repository port for work order persistence and queries.

use crate::work_order::domain::{WorkCode, WorkOrder, WorkOrderFilter, WorkOrderId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for work order repository operations.
pub type WorkOrderRepositoryResult<T> = Result<T, WorkOrderRepositoryError>;

/// Work order persistence contract.
///
/// Updates replace the full record produced by the domain; repositories never
/// apply partial changes of their own.
#[async_trait]
pub trait WorkOrderRepository: Send + Sync {
    /// Stores a new work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderRepositoryError::DuplicateWorkOrder`] when the
    /// identifier already exists or
    /// [`WorkOrderRepositoryError::DuplicateWorkCode`] when the work code is
    /// taken.
    async fn store(&self, order: &WorkOrder) -> WorkOrderRepositoryResult<()>;

    /// Replaces an existing work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderRepositoryError::NotFound`] when the work order does
    /// not exist.
    async fn update(&self, order: &WorkOrder) -> WorkOrderRepositoryResult<()>;

    /// Finds a work order by identifier.
    async fn find_by_id(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<Option<WorkOrder>>;

    /// Returns the work orders matching `filter` in creation order.
    async fn list(&self, filter: &WorkOrderFilter) -> WorkOrderRepositoryResult<Vec<WorkOrder>>;

    /// Counts every stored work order.
    async fn count(&self) -> WorkOrderRepositoryResult<u64>;

    /// Removes a work order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkOrderRepositoryError::NotFound`] when the work order does
    /// not exist.
    async fn delete(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<()>;
}

/// Errors returned by work order repository implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkOrderRepositoryError {
    /// A work order with the same identifier already exists.
    #[error("duplicate work order identifier: {0}")]
    DuplicateWorkOrder(WorkOrderId),

    /// Another work order already uses the work code.
    #[error("duplicate work code: {0}")]
    DuplicateWorkCode(WorkCode),

    /// The work order was not found.
    #[error("work order not found: {0}")]
    NotFound(WorkOrderId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkOrderRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
