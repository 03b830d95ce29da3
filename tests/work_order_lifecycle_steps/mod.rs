//! Step definitions for work order lifecycle scenarios.

pub mod given;
pub mod then;
pub mod when;
