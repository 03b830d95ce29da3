//! Domain model for work orders and their role-gated lifecycle.
//!
//! Every rule about who may change what is enforced here, on the aggregate,
//! so that any caller (service, adapter test, or future transport) sees the
//! same behaviour.

mod action;
mod capabilities;
mod category;
mod error;
mod filter;
mod ids;
mod patch;
mod policy;
mod status;
mod values;
mod work_order;

pub use action::WorkOrderAction;
pub use capabilities::WorkOrderCapabilities;
pub use category::{CategoryType, WorkCategory};
pub use error::{NoteKind, ParseCategoryTypeError, ParseWorkStatusError, WorkOrderDomainError};
pub use filter::WorkOrderFilter;
pub use ids::{WorkCode, WorkOrderId};
pub use patch::{StatusOverride, WorkOrderPatch};
pub use policy::WorkOrderPolicy;
pub use status::WorkStatus;
pub use values::{ClientContact, PriceInRs, WordCount};
pub use work_order::{ChangeOutcome, PersistedWorkOrderData, WorkOrder, WorkOrderDetails};
