//! Constants used throughout the HMS core crate.
//!
//! File names and field limits live here so the storage layer and the
//! validation rules agree on a single value.

/// Default directory for catalogue storage when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "hospital_data";

/// Catalogue file for admission types.
pub const ADMISSION_TYPES_FILENAME: &str = "admission_types.yaml";

/// Catalogue file for delivery result types.
pub const DELIVERY_RESULT_TYPES_FILENAME: &str = "delivery_result_types.yaml";

/// Catalogue file for exam types.
pub const EXAM_TYPES_FILENAME: &str = "exam_types.yaml";

/// Catalogue file for exams.
pub const EXAMS_FILENAME: &str = "exams.yaml";

/// Catalogue file for the allowed results of each exam.
pub const EXAM_ROWS_FILENAME: &str = "exam_rows.yaml";

/// Highest exam row code ever allocated, so codes of deleted rows are not handed out again.
pub const EXAM_ROW_SEQUENCE_FILENAME: &str = "exam_row_sequence.yaml";

pub const ADMISSION_TYPE_CODE_MAX: usize = 10;
pub const DELIVERY_RESULT_TYPE_CODE_MAX: usize = 1;
pub const EXAM_TYPE_CODE_MAX: usize = 2;
pub const EXAM_CODE_MAX: usize = 10;

/// Maximum description length for the simple code tables.
pub const DESCRIPTION_MAX: usize = 50;

pub const EXAM_DESCRIPTION_MAX: usize = 100;
pub const EXAM_ROW_DESCRIPTION_MAX: usize = 50;
