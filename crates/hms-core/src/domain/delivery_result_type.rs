use super::Coded;
use serde::{Deserialize, Serialize};

/// Outcome code recorded against a delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryResultType {
    pub code: String,
    pub description: String,
}

impl DeliveryResultType {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl Coded for DeliveryResultType {
    fn code(&self) -> &str {
        &self.code
    }
}
