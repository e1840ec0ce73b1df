//! YAML-backed manager implementations.
//!
//! All services share one [`CatalogueStore`]; build it once per process and hand
//! clones of the `Arc` to each service.

pub mod admission_types;
mod code_table;
pub mod delivery_result_types;
pub mod exams;
pub mod store;

pub use admission_types::AdmissionTypeService;
pub use delivery_result_types::DeliveryResultTypeService;
pub use exams::{ExamService, ExamTypeService};
pub use store::CatalogueStore;
