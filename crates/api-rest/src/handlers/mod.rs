//! Route handlers, one module per catalogue.

pub mod admission_types;
pub mod delivery_result_types;
pub mod exam_types;
pub mod exams;
pub mod health;
