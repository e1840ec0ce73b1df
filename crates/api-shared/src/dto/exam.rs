use super::{require, ExamTypeDto, Validate};
use hms_core::{ExamProcedure, HmsResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamDto {
    /// The exam code
    #[schema(example = "E1")]
    pub code: String,
    /// The exam description
    #[schema(example = "HAEMOGLOBIN")]
    pub description: String,
    /// The type of exam
    pub examtype: ExamTypeDto,
    /// How the result is recorded: 1 = one of the rows, 2 = one result per row, 3 = free text
    #[schema(value_type = u8, example = 1)]
    pub procedure: ExamProcedure,
    /// The default result
    #[schema(example = ">=12 (NORMAL)")]
    pub default_result: Option<String>,
}

/// An exam together with its allowed results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExamWithRowsDto {
    /// The exam to be changed
    pub exam: ExamDto,
    /// Possible results for the exam (only for exams with procedure 1 and 2)
    #[serde(default)]
    #[schema(example = json!([">=12 (NORMAL)", "IRREGULAR"]))]
    pub rows: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamRowDto {
    /// The exam row code
    #[schema(example = 4)]
    pub code: u32,
    /// The code of the exam this row belongs to
    #[schema(example = "E1")]
    pub exam_code: String,
    /// The allowed result
    #[schema(example = "IRREGULAR")]
    pub description: String,
}

impl Validate for ExamDto {
    fn validate(&self) -> HmsResult<()> {
        require("code", &self.code)?;
        require("description", &self.description)?;
        require("examtype.code", &self.examtype.code)
    }
}

impl Validate for ExamWithRowsDto {
    fn validate(&self) -> HmsResult<()> {
        self.exam.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "exam": {
            "code": "E1",
            "description": "HAEMOGLOBIN",
            "examtype": { "code": "HB", "description": "Haematology" },
            "procedure": 1,
            "defaultResult": ">=12 (NORMAL)"
        },
        "rows": [">=12 (NORMAL)", "IRREGULAR"]
    }"#;

    #[test]
    fn test_exam_with_rows_parses_wire_names() {
        let dto: ExamWithRowsDto = serde_json::from_str(BODY).unwrap();

        assert_eq!(dto.exam.procedure, ExamProcedure::SingleResult);
        assert_eq!(dto.exam.default_result.as_deref(), Some(">=12 (NORMAL)"));
        assert_eq!(dto.rows.as_ref().map(Vec::len), Some(2));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_rows_are_optional() {
        let dto: ExamWithRowsDto = serde_json::from_str(
            r#"{"exam":{"code":"E2","description":"NOTES","examtype":{"code":"HB","description":"x"},"procedure":3}}"#,
        )
        .unwrap();
        assert_eq!(dto.rows, None);
        assert_eq!(dto.exam.default_result, None);
    }

    #[test]
    fn test_unknown_procedure_is_rejected() {
        let body = BODY.replace("\"procedure\": 1", "\"procedure\": 9");
        assert!(serde_json::from_str::<ExamWithRowsDto>(&body).is_err());
    }

    #[test]
    fn test_exam_row_serializes_camel_case() {
        let row = ExamRowDto {
            code: 4,
            exam_code: "E1".into(),
            description: "IRREGULAR".into(),
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"code":4,"examCode":"E1","description":"IRREGULAR"}"#
        );
    }
}
