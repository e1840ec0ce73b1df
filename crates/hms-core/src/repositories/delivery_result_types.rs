//! Delivery result type catalogue backed by `delivery_result_types.yaml`.
//!
//! Delivery result codes are a single character.

use super::code_table::CodeTable;
use super::store::CatalogueStore;
use crate::constants::{
    DELIVERY_RESULT_TYPES_FILENAME, DELIVERY_RESULT_TYPE_CODE_MAX, DESCRIPTION_MAX,
};
use crate::domain::{CatalogueKind, DeliveryResultType};
use crate::error::HmsResult;
use crate::managers::DeliveryResultTypeManager;
use crate::validation::{validate_code, validate_description};
use std::sync::Arc;

const KIND: CatalogueKind = CatalogueKind::DeliveryResultType;

#[derive(Debug)]
pub struct DeliveryResultTypeService {
    table: CodeTable<DeliveryResultType>,
}

impl DeliveryResultTypeService {
    pub fn new(store: Arc<CatalogueStore>) -> Self {
        Self {
            table: CodeTable::new(store, DELIVERY_RESULT_TYPES_FILENAME, KIND),
        }
    }

    fn validate(delivery_result_type: DeliveryResultType) -> HmsResult<DeliveryResultType> {
        Ok(DeliveryResultType {
            code: validate_code(
                KIND,
                &delivery_result_type.code,
                DELIVERY_RESULT_TYPE_CODE_MAX,
            )?,
            description: validate_description(
                KIND,
                &delivery_result_type.description,
                DESCRIPTION_MAX,
            )?,
        })
    }
}

impl DeliveryResultTypeManager for DeliveryResultTypeService {
    fn delivery_result_types(&self) -> HmsResult<Vec<DeliveryResultType>> {
        self.table.list()
    }

    fn new_delivery_result_type(
        &self,
        delivery_result_type: DeliveryResultType,
    ) -> HmsResult<DeliveryResultType> {
        self.table.insert(Self::validate(delivery_result_type)?)
    }

    fn update_delivery_result_type(
        &self,
        delivery_result_type: DeliveryResultType,
    ) -> HmsResult<DeliveryResultType> {
        self.table.replace(Self::validate(delivery_result_type)?)
    }

    fn delete_delivery_result_type(
        &self,
        delivery_result_type: &DeliveryResultType,
    ) -> HmsResult<()> {
        self.table.remove(&delivery_result_type.code)
    }

    fn is_code_present(&self, code: &str) -> HmsResult<bool> {
        self.table.contains(code.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;
    use crate::HmsError;
    use tempfile::TempDir;

    fn test_service(dir: &std::path::Path) -> DeliveryResultTypeService {
        let cfg = CoreConfig::new(dir.to_path_buf()).expect("CoreConfig::new should succeed");
        DeliveryResultTypeService::new(Arc::new(CatalogueStore::new(&cfg)))
    }

    #[test]
    fn test_single_character_codes() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp_dir.path());

        service
            .new_delivery_result_type(DeliveryResultType::new("A", "Alive"))
            .unwrap();

        let err = service
            .new_delivery_result_type(DeliveryResultType::new("123", "Too long"))
            .unwrap_err();
        assert!(matches!(err, HmsError::InvalidInput(_)));
        assert_eq!(service.delivery_result_types().unwrap().len(), 1);
    }

    #[test]
    fn test_code_control() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp_dir.path());
        assert!(!service.is_code_present("S").unwrap());

        service
            .new_delivery_result_type(DeliveryResultType::new("S", "Stillbirth"))
            .unwrap();
        assert!(service.is_code_present("S").unwrap());
        assert!(service.is_code_present(" S ").unwrap());
    }

    #[test]
    fn test_delete_removes_only_matching_code() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp_dir.path());
        let alive = service
            .new_delivery_result_type(DeliveryResultType::new("A", "Alive"))
            .unwrap();
        service
            .new_delivery_result_type(DeliveryResultType::new("S", "Stillbirth"))
            .unwrap();

        service.delete_delivery_result_type(&alive).unwrap();

        assert_eq!(
            service.delivery_result_types().unwrap(),
            vec![DeliveryResultType::new("S", "Stillbirth")]
        );
    }
}
