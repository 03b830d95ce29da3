//! Application services for work order lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateWorkOrderRequest, TransitionWorkOrderRequest, WorkOrderLifecycleError,
    WorkOrderLifecycleResult, WorkOrderLifecycleService, WorkOrderListing,
};
