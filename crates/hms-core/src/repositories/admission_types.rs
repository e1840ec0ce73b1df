//! Admission type catalogue backed by `admission_types.yaml`.

use super::code_table::CodeTable;
use super::store::CatalogueStore;
use crate::constants::{ADMISSION_TYPES_FILENAME, ADMISSION_TYPE_CODE_MAX, DESCRIPTION_MAX};
use crate::domain::{AdmissionType, CatalogueKind};
use crate::error::HmsResult;
use crate::managers::AdmissionTypeManager;
use crate::validation::{validate_code, validate_description};
use std::sync::Arc;

const KIND: CatalogueKind = CatalogueKind::AdmissionType;

#[derive(Debug)]
pub struct AdmissionTypeService {
    table: CodeTable<AdmissionType>,
}

impl AdmissionTypeService {
    pub fn new(store: Arc<CatalogueStore>) -> Self {
        Self {
            table: CodeTable::new(store, ADMISSION_TYPES_FILENAME, KIND),
        }
    }

    fn validate(admission_type: AdmissionType) -> HmsResult<AdmissionType> {
        Ok(AdmissionType {
            code: validate_code(KIND, &admission_type.code, ADMISSION_TYPE_CODE_MAX)?,
            description: validate_description(KIND, &admission_type.description, DESCRIPTION_MAX)?,
        })
    }
}

impl AdmissionTypeManager for AdmissionTypeService {
    fn admission_types(&self) -> HmsResult<Vec<AdmissionType>> {
        self.table.list()
    }

    fn new_admission_type(&self, admission_type: AdmissionType) -> HmsResult<AdmissionType> {
        self.table.insert(Self::validate(admission_type)?)
    }

    fn update_admission_type(&self, admission_type: AdmissionType) -> HmsResult<AdmissionType> {
        self.table.replace(Self::validate(admission_type)?)
    }

    fn delete_admission_type(&self, admission_type: &AdmissionType) -> HmsResult<()> {
        self.table.remove(&admission_type.code)
    }

    fn is_code_present(&self, code: &str) -> HmsResult<bool> {
        self.table.contains(code.trim())
    }
}
