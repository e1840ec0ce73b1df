//! Persistence-side domain models.
//!
//! These are plain value types. Field validation is a manager concern, so a
//! model can hold any strings a DTO carried in; the managers reject what the
//! catalogue rules do not allow.

mod admission_type;
mod delivery_result_type;
mod exam;

pub use admission_type::AdmissionType;
pub use delivery_result_type::DeliveryResultType;
pub use exam::{Exam, ExamProcedure, ExamRow, ExamType};

/// The code tables managed by HMS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogueKind {
    AdmissionType,
    DeliveryResultType,
    ExamType,
    Exam,
    ExamRow,
}

impl CatalogueKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogueKind::AdmissionType => "admission type",
            CatalogueKind::DeliveryResultType => "delivery result type",
            CatalogueKind::ExamType => "exam type",
            CatalogueKind::Exam => "exam",
            CatalogueKind::ExamRow => "exam row",
        }
    }
}

impl std::fmt::Display for CatalogueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A record stored in a catalogue, identified by its code.
pub trait Coded {
    fn code(&self) -> &str;
}
