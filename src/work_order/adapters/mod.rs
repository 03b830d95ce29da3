//! Adapter implementations for work order ports.

pub mod memory;
pub mod postgres;
