//! In-memory work order repository for tests and embedded hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::work_order::{
    domain::{WorkCode, WorkOrder, WorkOrderFilter, WorkOrderId},
    ports::{WorkOrderRepository, WorkOrderRepositoryError, WorkOrderRepositoryResult},
};

/// Thread-safe in-memory work order repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkOrderRepository {
    state: Arc<RwLock<InMemoryWorkOrderState>>,
}

#[derive(Debug, Default)]
struct InMemoryWorkOrderState {
    orders: HashMap<WorkOrderId, WorkOrder>,
    creation_order: Vec<WorkOrderId>,
    code_index: HashMap<WorkCode, WorkOrderId>,
}

impl InMemoryWorkOrderRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> WorkOrderRepositoryError {
    WorkOrderRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl WorkOrderRepository for InMemoryWorkOrderRepository {
    async fn store(&self, order: &WorkOrder) -> WorkOrderRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.orders.contains_key(&order.id()) {
            return Err(WorkOrderRepositoryError::DuplicateWorkOrder(order.id()));
        }
        if state.code_index.contains_key(order.work_code()) {
            return Err(WorkOrderRepositoryError::DuplicateWorkCode(
                order.work_code().clone(),
            ));
        }

        state.code_index.insert(order.work_code().clone(), order.id());
        state.creation_order.push(order.id());
        state.orders.insert(order.id(), order.clone());
        Ok(())
    }

    async fn update(&self, order: &WorkOrder) -> WorkOrderRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .orders
            .get_mut(&order.id())
            .ok_or(WorkOrderRepositoryError::NotFound(order.id()))?;
        *slot = order.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<Option<WorkOrder>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.orders.get(&id).cloned())
    }

    async fn list(&self, filter: &WorkOrderFilter) -> WorkOrderRepositoryResult<Vec<WorkOrder>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .creation_order
            .iter()
            .filter_map(|id| state.orders.get(id))
            .filter(|order| filter.matches(order))
            .cloned()
            .collect())
    }

    async fn count(&self) -> WorkOrderRepositoryResult<u64> {
        let state = self.state.read().map_err(poisoned)?;
        u64::try_from(state.orders.len()).map_err(WorkOrderRepositoryError::persistence)
    }

    async fn delete(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let removed = state
            .orders
            .remove(&id)
            .ok_or(WorkOrderRepositoryError::NotFound(id))?;
        state.code_index.remove(removed.work_code());
        state.creation_order.retain(|existing| *existing != id);
        Ok(())
    }
}
