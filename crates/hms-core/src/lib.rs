//! # HMS Core
//!
//! Core business logic for the HMS hospital reference-data service.
//!
//! This crate contains the domain models, the manager interfaces and their
//! YAML-backed implementations:
//! - Admission types, delivery result types, exam types
//! - Exams and their allowed result rows
//! - Validation of codes, descriptions and exam procedure rules
//!
//! **No API concerns**: HTTP handlers, DTOs and JSON mapping belong in `api-rest` and
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod managers;
pub mod repositories;
pub mod validation;

pub use config::CoreConfig;
pub use constants::DEFAULT_DATA_DIR;
pub use domain::{
    AdmissionType, CatalogueKind, DeliveryResultType, Exam, ExamProcedure, ExamRow, ExamType,
};
pub use error::{HmsError, HmsResult};
pub use managers::{AdmissionTypeManager, DeliveryResultTypeManager, ExamManager, ExamTypeManager};
pub use repositories::{
    AdmissionTypeService, CatalogueStore, DeliveryResultTypeService, ExamService, ExamTypeService,
};

pub use hms_types::{Blob, NonEmptyText};
