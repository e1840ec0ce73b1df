//! # API Shared
//!
//! Shared request/response definitions for the HMS APIs.
//!
//! Contains:
//! - DTOs (`dto` module): the JSON shapes of every endpoint, with OpenAPI schemas
//! - Mappers (`mapper` module): conversions between `hms-core` models and DTOs
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; kept separate so other front ends can speak the same shapes.

pub mod dto;
pub mod health;
pub mod mapper;

pub use dto::{
    AdmissionTypeDto, DeliveryResultTypeDto, ExamDto, ExamRowDto, ExamTypeDto, ExamWithRowsDto,
    HealthRes, Validate,
};
pub use health::HealthService;
pub use mapper::{
    AdmissionTypeMapper, DeliveryResultTypeMapper, ExamMapper, ExamRowMapper, ExamTypeMapper,
    Mapper,
};
