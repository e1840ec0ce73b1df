//! Manager interfaces.
//!
//! A manager owns the business rules and persistence of one catalogue. The HTTP
//! layer depends only on these traits, so handlers can be driven by the
//! YAML-backed implementations in [`crate::repositories`] or by test doubles.
//!
//! All methods are synchronous; implementations must be safe to share across
//! request handlers (`Send + Sync`).

use crate::domain::{AdmissionType, DeliveryResultType, Exam, ExamRow, ExamType};
use crate::HmsResult;

pub trait AdmissionTypeManager: Send + Sync {
    /// All admission types, ordered by code.
    fn admission_types(&self) -> HmsResult<Vec<AdmissionType>>;

    /// Stores a new admission type and returns it as persisted.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when a field breaks the catalogue rules, `DuplicateCode`
    /// when the code is taken.
    fn new_admission_type(&self, admission_type: AdmissionType) -> HmsResult<AdmissionType>;

    /// Replaces the description of an existing admission type.
    fn update_admission_type(&self, admission_type: AdmissionType) -> HmsResult<AdmissionType>;

    fn delete_admission_type(&self, admission_type: &AdmissionType) -> HmsResult<()>;

    fn is_code_present(&self, code: &str) -> HmsResult<bool>;
}

pub trait DeliveryResultTypeManager: Send + Sync {
    fn delivery_result_types(&self) -> HmsResult<Vec<DeliveryResultType>>;

    fn new_delivery_result_type(
        &self,
        delivery_result_type: DeliveryResultType,
    ) -> HmsResult<DeliveryResultType>;

    fn update_delivery_result_type(
        &self,
        delivery_result_type: DeliveryResultType,
    ) -> HmsResult<DeliveryResultType>;

    fn delete_delivery_result_type(
        &self,
        delivery_result_type: &DeliveryResultType,
    ) -> HmsResult<()>;

    fn is_code_present(&self, code: &str) -> HmsResult<bool>;
}

pub trait ExamTypeManager: Send + Sync {
    fn exam_types(&self) -> HmsResult<Vec<ExamType>>;

    fn new_exam_type(&self, exam_type: ExamType) -> HmsResult<ExamType>;

    fn update_exam_type(&self, exam_type: ExamType) -> HmsResult<ExamType>;

    /// # Errors
    ///
    /// `InUse` while any exam still belongs to this type.
    fn delete_exam_type(&self, exam_type: &ExamType) -> HmsResult<()>;

    fn is_code_present(&self, code: &str) -> HmsResult<bool>;
}

pub trait ExamManager: Send + Sync {
    fn exams(&self) -> HmsResult<Vec<Exam>>;

    /// Rows of one exam in their stored order.
    ///
    /// # Errors
    ///
    /// `NotFound` when the exam does not exist.
    fn exam_rows(&self, exam_code: &str) -> HmsResult<Vec<ExamRow>>;

    /// Stores a new exam together with its allowed results.
    fn new_exam(&self, exam: Exam, rows: Vec<String>) -> HmsResult<Exam>;

    /// Replaces an exam and all of its rows.
    fn update_exam(&self, exam: Exam, rows: Vec<String>) -> HmsResult<Exam>;

    /// Removes an exam and its rows.
    fn delete_exam(&self, exam: &Exam) -> HmsResult<()>;

    fn is_code_present(&self, code: &str) -> HmsResult<bool>;
}
