//! In-memory work order adapters.

mod repository;

pub use repository::InMemoryWorkOrderRepository;
