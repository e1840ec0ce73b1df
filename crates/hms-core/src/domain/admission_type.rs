use super::Coded;
use serde::{Deserialize, Serialize};

/// How a patient came to be admitted (e.g. emergency, referral).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionType {
    pub code: String,
    pub description: String,
}

impl AdmissionType {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl Coded for AdmissionType {
    fn code(&self) -> &str {
        &self.code
    }
}
