use super::Coded;
use serde::{Deserialize, Serialize};

/// Laboratory exam category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamType {
    pub code: String,
    pub description: String,
}

impl ExamType {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl Coded for ExamType {
    fn code(&self) -> &str {
        &self.code
    }
}

/// How the result of an exam is recorded.
///
/// Serialized as its integer code (`1`, `2`, `3`) both on the wire and in storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExamProcedure {
    /// One result picked from the exam's rows.
    SingleResult,
    /// One result per row.
    MultipleResults,
    /// Free-text result; the exam has no rows.
    FreeText,
}

impl ExamProcedure {
    pub fn as_code(self) -> u8 {
        match self {
            ExamProcedure::SingleResult => 1,
            ExamProcedure::MultipleResults => 2,
            ExamProcedure::FreeText => 3,
        }
    }

    /// Procedures 1 and 2 enumerate discrete results and therefore need rows.
    pub fn requires_rows(self) -> bool {
        !matches!(self, ExamProcedure::FreeText)
    }
}

impl TryFrom<u8> for ExamProcedure {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ExamProcedure::SingleResult),
            2 => Ok(ExamProcedure::MultipleResults),
            3 => Ok(ExamProcedure::FreeText),
            other => Err(other),
        }
    }
}

impl Serialize for ExamProcedure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.as_code())
    }
}

impl<'de> Deserialize<'de> for ExamProcedure {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        ExamProcedure::try_from(code).map_err(|other| {
            serde::de::Error::custom(format!("unknown exam procedure {other} (expected 1, 2 or 3)"))
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub code: String,
    pub description: String,
    pub exam_type: ExamType,
    pub procedure: ExamProcedure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_result: Option<String>,
}

impl Coded for Exam {
    fn code(&self) -> &str {
        &self.code
    }
}

/// One allowed result value of an exam.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRow {
    pub code: u32,
    pub exam_code: String,
    pub description: String,
}
