//! Input validation utilities.
//!
//! Managers run every incoming record through these checks before touching
//! storage. Each function returns the normalised (trimmed) value on success.

use crate::domain::CatalogueKind;
use crate::{HmsError, HmsResult};
use hms_types::{Code, NonEmptyText, TextError};

fn describe(kind: CatalogueKind, field: &str, err: TextError) -> HmsError {
    let reason = match err {
        TextError::Empty => "is required".to_string(),
        TextError::TooLong { max, actual } => {
            format!("is too long (max {max} characters, got {actual})")
        }
        TextError::InnerWhitespace => "must not contain whitespace".to_string(),
    };
    HmsError::InvalidInput(format!("{kind} {field} {reason}"))
}

/// Validates a catalogue code.
///
/// # Errors
///
/// Returns `HmsError::InvalidInput` if the code is blank, longer than `max`
/// characters, or contains whitespace.
pub fn validate_code(kind: CatalogueKind, code: &str, max: usize) -> HmsResult<String> {
    Code::parse(code, max)
        .map(Code::into_inner)
        .map_err(|e| describe(kind, "code", e))
}

/// Validates a required description.
///
/// # Errors
///
/// Returns `HmsError::InvalidInput` if the description is blank or longer than
/// `max` characters.
pub fn validate_description(
    kind: CatalogueKind,
    description: &str,
    max: usize,
) -> HmsResult<String> {
    NonEmptyText::bounded(description, max)
        .map(NonEmptyText::into_inner)
        .map_err(|e| describe(kind, "description", e))
}

/// Validates the allowed results of an exam.
///
/// Rows are trimmed; blank rows, over-long rows and duplicates are rejected.
/// Order is preserved.
pub fn validate_exam_rows(rows: &[String], max: usize) -> HmsResult<Vec<String>> {
    let mut cleaned: Vec<String> = Vec::with_capacity(rows.len());
    for row in rows {
        let row = NonEmptyText::bounded(row, max)
            .map_err(|e| describe(CatalogueKind::ExamRow, "description", e))?
            .into_inner();
        if cleaned.contains(&row) {
            return Err(HmsError::InvalidInput(format!(
                "exam row '{row}' is listed more than once"
            )));
        }
        cleaned.push(row);
    }
    Ok(cleaned)
}
