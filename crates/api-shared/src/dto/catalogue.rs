use super::{require, Validate};
use hms_core::HmsResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdmissionTypeDto {
    /// The admission type code
    #[schema(example = "ZZ")]
    pub code: String,
    /// The admission type description
    #[schema(example = "EMERGENCY")]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryResultTypeDto {
    /// The delivery result type code
    #[schema(example = "A")]
    pub code: String,
    /// The delivery result type description
    #[schema(example = "Alive and well")]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExamTypeDto {
    /// The exam type code
    #[schema(example = "HB")]
    pub code: String,
    /// The exam type description
    #[schema(example = "Haematology")]
    pub description: String,
}

impl Validate for AdmissionTypeDto {
    fn validate(&self) -> HmsResult<()> {
        require("code", &self.code)?;
        require("description", &self.description)
    }
}

impl Validate for DeliveryResultTypeDto {
    fn validate(&self) -> HmsResult<()> {
        require("code", &self.code)?;
        require("description", &self.description)
    }
}

impl Validate for ExamTypeDto {
    fn validate(&self) -> HmsResult<()> {
        require("code", &self.code)?;
        require("description", &self.description)
    }
}
