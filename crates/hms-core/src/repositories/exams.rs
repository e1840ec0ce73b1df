//! Exam catalogue.
//!
//! Three files cooperate here:
//!
//! - `exam_types.yaml`: the exam categories
//! - `exams.yaml`: exams, referencing their type by code
//! - `exam_rows.yaml`: the allowed results of every exam, in allocation order
//! - `exam_row_sequence.yaml`: the last row code handed out
//!
//! Exams are stored with the code of their type only and joined with the exam
//! type catalogue on read, so renaming a type is reflected in every exam.

use super::code_table::CodeTable;
use super::store::{CatalogueStore, StoreGuard};
use crate::constants::{
    DESCRIPTION_MAX, EXAMS_FILENAME, EXAM_CODE_MAX, EXAM_DESCRIPTION_MAX, EXAM_ROWS_FILENAME,
    EXAM_ROW_DESCRIPTION_MAX, EXAM_ROW_SEQUENCE_FILENAME, EXAM_TYPES_FILENAME,
    EXAM_TYPE_CODE_MAX,
};
use crate::domain::{CatalogueKind, Exam, ExamProcedure, ExamRow, ExamType};
use crate::error::{HmsError, HmsResult};
use crate::managers::{ExamManager, ExamTypeManager};
use crate::validation::{validate_code, validate_description, validate_exam_rows};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// EXAM TYPES
// ============================================================================

#[derive(Debug)]
pub struct ExamTypeService {
    table: CodeTable<ExamType>,
}

impl ExamTypeService {
    pub fn new(store: Arc<CatalogueStore>) -> Self {
        Self {
            table: CodeTable::new(store, EXAM_TYPES_FILENAME, CatalogueKind::ExamType),
        }
    }

    fn validate(exam_type: ExamType) -> HmsResult<ExamType> {
        Ok(ExamType {
            code: validate_code(CatalogueKind::ExamType, &exam_type.code, EXAM_TYPE_CODE_MAX)?,
            description: validate_description(
                CatalogueKind::ExamType,
                &exam_type.description,
                DESCRIPTION_MAX,
            )?,
        })
    }
}

impl ExamTypeManager for ExamTypeService {
    fn exam_types(&self) -> HmsResult<Vec<ExamType>> {
        self.table.list()
    }

    fn new_exam_type(&self, exam_type: ExamType) -> HmsResult<ExamType> {
        self.table.insert(Self::validate(exam_type)?)
    }

    fn update_exam_type(&self, exam_type: ExamType) -> HmsResult<ExamType> {
        self.table.replace(Self::validate(exam_type)?)
    }

    fn delete_exam_type(&self, exam_type: &ExamType) -> HmsResult<()> {
        let store = self.table.store();
        let guard = store.lock()?;

        let exams: Vec<StoredExam> = store.load(EXAMS_FILENAME)?;
        if exams.iter().any(|e| e.exam_type_code == exam_type.code) {
            return Err(HmsError::InUse {
                kind: CatalogueKind::ExamType,
                code: exam_type.code.clone(),
                referenced_by: CatalogueKind::Exam,
            });
        }

        self.table.remove_locked(&guard, &exam_type.code)
    }

    fn is_code_present(&self, code: &str) -> HmsResult<bool> {
        self.table.contains(code.trim())
    }
}

// ============================================================================
// EXAMS
// ============================================================================

/// On-disk shape of an exam.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredExam {
    code: String,
    description: String,
    exam_type_code: String,
    procedure: ExamProcedure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_result: Option<String>,
}

impl StoredExam {
    fn from_exam(exam: &Exam) -> Self {
        Self {
            code: exam.code.clone(),
            description: exam.description.clone(),
            exam_type_code: exam.exam_type.code.clone(),
            procedure: exam.procedure,
            default_result: exam.default_result.clone(),
        }
    }

    fn into_exam(self, exam_type: ExamType) -> Exam {
        Exam {
            code: self.code,
            description: self.description,
            exam_type,
            procedure: self.procedure,
            default_result: self.default_result,
        }
    }
}

/// On-disk high-water mark of row codes, stored as a one-record sequence.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct RowSequence {
    last_code: u32,
}

#[derive(Debug)]
pub struct ExamService {
    store: Arc<CatalogueStore>,
}

impl ExamService {
    pub fn new(store: Arc<CatalogueStore>) -> Self {
        Self { store }
    }

    /// Normalises an exam and its rows and checks the procedure rules.
    fn validate(exam: Exam, rows: &[String]) -> HmsResult<(Exam, Vec<String>)> {
        let code = validate_code(CatalogueKind::Exam, &exam.code, EXAM_CODE_MAX)?;
        let description =
            validate_description(CatalogueKind::Exam, &exam.description, EXAM_DESCRIPTION_MAX)?;
        let rows = validate_exam_rows(rows, EXAM_ROW_DESCRIPTION_MAX)?;
        let default_result = exam
            .default_result
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        if exam.procedure.requires_rows() && rows.is_empty() {
            return Err(HmsError::InvalidInput(format!(
                "exam {code} with procedure {} requires at least one row",
                exam.procedure.as_code()
            )));
        }
        if !exam.procedure.requires_rows() && !rows.is_empty() {
            return Err(HmsError::InvalidInput(format!(
                "exam {code} with procedure 3 cannot have rows"
            )));
        }

        if exam.procedure == ExamProcedure::SingleResult {
            if let Some(default) = &default_result {
                if !rows.contains(default) {
                    return Err(HmsError::InvalidInput(format!(
                        "default result '{default}' of exam {code} is not one of its rows"
                    )));
                }
            }
        }

        let exam = Exam {
            code,
            description,
            exam_type: exam.exam_type,
            procedure: exam.procedure,
            default_result,
        };
        Ok((exam, rows))
    }

    /// Resolves the stored exam type an exam refers to.
    fn resolve_exam_type(&self, code: &str) -> HmsResult<ExamType> {
        let exam_types: Vec<ExamType> = self.store.load(EXAM_TYPES_FILENAME)?;
        exam_types
            .into_iter()
            .find(|t| t.code == code)
            .ok_or_else(|| HmsError::InvalidInput(format!("exam type not found: {code}")))
    }

    /// Writes the exam catalogue and swaps the rows of one exam.
    ///
    /// Exams, rows and the row sequence are staged together and only then
    /// renamed into place.
    fn write_exam(
        &self,
        guard: &StoreGuard<'_>,
        mut exams: Vec<StoredExam>,
        exam_code: &str,
        rows: Vec<String>,
    ) -> HmsResult<()> {
        let mut all_rows: Vec<ExamRow> = self.store.load(EXAM_ROWS_FILENAME)?;
        let sequence: Vec<RowSequence> = self.store.load(EXAM_ROW_SEQUENCE_FILENAME)?;

        // Row files written before the sequence existed still count.
        let mut last_code = sequence
            .first()
            .map(|s| s.last_code)
            .unwrap_or(0)
            .max(all_rows.iter().map(|r| r.code).max().unwrap_or(0));

        all_rows.retain(|r| r.exam_code != exam_code);
        for description in rows {
            last_code += 1;
            all_rows.push(ExamRow {
                code: last_code,
                exam_code: exam_code.to_string(),
                description,
            });
        }

        exams.sort_by(|a, b| a.code.cmp(&b.code));

        let staged = vec![
            self.store.stage(guard, EXAMS_FILENAME, &exams)?,
            self.store.stage(guard, EXAM_ROWS_FILENAME, &all_rows)?,
            self.store
                .stage(guard, EXAM_ROW_SEQUENCE_FILENAME, &[RowSequence { last_code }])?,
        ];
        self.store.commit(guard, staged)
    }
}

impl ExamManager for ExamService {
    fn exams(&self) -> HmsResult<Vec<Exam>> {
        let exam_types: Vec<ExamType> = self.store.load(EXAM_TYPES_FILENAME)?;
        let stored: Vec<StoredExam> = self.store.load(EXAMS_FILENAME)?;

        let mut exams = Vec::with_capacity(stored.len());
        for exam in stored {
            let exam_type = match exam_types.iter().find(|t| t.code == exam.exam_type_code) {
                Some(exam_type) => exam_type.clone(),
                None => {
                    // Still listed so that it can be corrected or deleted.
                    tracing::warn!(
                        "exam {} refers to missing exam type {}",
                        exam.code,
                        exam.exam_type_code
                    );
                    ExamType::new(exam.exam_type_code.clone(), "")
                }
            };
            exams.push(exam.into_exam(exam_type));
        }
        Ok(exams)
    }

    fn exam_rows(&self, exam_code: &str) -> HmsResult<Vec<ExamRow>> {
        if !self.is_code_present(exam_code)? {
            return Err(HmsError::not_found(CatalogueKind::Exam, exam_code));
        }

        let mut rows: Vec<ExamRow> = self.store.load(EXAM_ROWS_FILENAME)?;
        rows.retain(|r| r.exam_code == exam_code.trim());
        rows.sort_by_key(|r| r.code);
        Ok(rows)
    }

    fn new_exam(&self, exam: Exam, rows: Vec<String>) -> HmsResult<Exam> {
        let (mut exam, rows) = Self::validate(exam, &rows)?;

        let guard = self.store.lock()?;
        exam.exam_type = self.resolve_exam_type(&exam.exam_type.code)?;

        let mut exams: Vec<StoredExam> = self.store.load(EXAMS_FILENAME)?;
        if exams.iter().any(|e| e.code == exam.code) {
            return Err(HmsError::duplicate(CatalogueKind::Exam, &exam.code));
        }
        exams.push(StoredExam::from_exam(&exam));

        let row_count = rows.len();
        self.write_exam(&guard, exams, &exam.code, rows)?;
        tracing::info!("created exam {} with {} rows", exam.code, row_count);
        Ok(exam)
    }

    fn update_exam(&self, exam: Exam, rows: Vec<String>) -> HmsResult<Exam> {
        let (mut exam, rows) = Self::validate(exam, &rows)?;

        let guard = self.store.lock()?;
        exam.exam_type = self.resolve_exam_type(&exam.exam_type.code)?;

        let mut exams: Vec<StoredExam> = self.store.load(EXAMS_FILENAME)?;
        let slot = exams
            .iter_mut()
            .find(|e| e.code == exam.code)
            .ok_or_else(|| HmsError::not_found(CatalogueKind::Exam, &exam.code))?;
        *slot = StoredExam::from_exam(&exam);

        let row_count = rows.len();
        self.write_exam(&guard, exams, &exam.code, rows)?;
        tracing::info!("updated exam {} with {} rows", exam.code, row_count);
        Ok(exam)
    }

    fn delete_exam(&self, exam: &Exam) -> HmsResult<()> {
        let guard = self.store.lock()?;

        let mut exams: Vec<StoredExam> = self.store.load(EXAMS_FILENAME)?;
        let before = exams.len();
        exams.retain(|e| e.code != exam.code);
        if exams.len() == before {
            return Err(HmsError::not_found(CatalogueKind::Exam, &exam.code));
        }

        self.write_exam(&guard, exams, &exam.code, Vec::new())?;
        tracing::info!("deleted exam {}", exam.code);
        Ok(())
    }

    fn is_code_present(&self, code: &str) -> HmsResult<bool> {
        let exams: Vec<StoredExam> = self.store.load(EXAMS_FILENAME)?;
        let code = code.trim();
        Ok(exams.iter().any(|e| e.code == code))
    }
}
