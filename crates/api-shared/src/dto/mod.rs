//! Data-transfer objects.
//!
//! DTOs are the exact JSON shapes exchanged over HTTP. They carry no behaviour
//! beyond [`Validate`], which checks required fields before a request reaches a
//! manager. Catalogue rules (lengths, uniqueness) are checked by the managers.

mod catalogue;
mod exam;

pub use catalogue::{AdmissionTypeDto, DeliveryResultTypeDto, ExamTypeDto};
pub use exam::{ExamDto, ExamRowDto, ExamWithRowsDto};

use hms_core::{HmsError, HmsResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Required-field checks for request bodies.
pub trait Validate {
    /// # Errors
    ///
    /// Returns `HmsError::InvalidInput` naming the first missing field.
    fn validate(&self) -> HmsResult<()>;
}

pub(crate) fn require(field: &str, value: &str) -> HmsResult<()> {
    if value.trim().is_empty() {
        return Err(HmsError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
