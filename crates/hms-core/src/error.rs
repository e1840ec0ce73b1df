use crate::domain::CatalogueKind;

#[derive(Debug, thiserror::Error)]
pub enum HmsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{kind} code already in use: {code}")]
    DuplicateCode { kind: CatalogueKind, code: String },
    #[error("{kind} not found: {code}")]
    NotFound { kind: CatalogueKind, code: String },
    #[error("{kind} {code} is still referenced by {referenced_by}")]
    InUse {
        kind: CatalogueKind,
        code: String,
        referenced_by: CatalogueKind,
    },

    #[error("failed to create data directory: {0}")]
    DataDirCreation(std::io::Error),
    #[error("failed to read catalogue file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write catalogue file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
    #[error("catalogue write lock poisoned")]
    LockPoisoned,
}

impl HmsError {
    pub(crate) fn not_found(kind: CatalogueKind, code: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            code: code.into(),
        }
    }

    pub(crate) fn duplicate(kind: CatalogueKind, code: impl Into<String>) -> Self {
        Self::DuplicateCode {
            kind,
            code: code.into(),
        }
    }
}

pub type HmsResult<T> = std::result::Result<T, HmsError>;
