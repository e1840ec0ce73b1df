//! YAML catalogue storage.
//!
//! Every catalogue is a single YAML file directly under the data directory:
//!
//! ```text
//! <data_dir>/
//!   admission_types.yaml
//!   delivery_result_types.yaml
//!   exam_types.yaml
//!   exams.yaml
//!   exam_rows.yaml
//!   exam_row_sequence.yaml
//! ```
//!
//! Each file holds a YAML sequence of records. A file that does not exist yet
//! reads as an empty catalogue. Writes land in a hidden sibling file first and
//! are then renamed over the target, so a reader never observes a half-written
//! catalogue. Changes spanning several files are staged in full before the
//! first rename.

use crate::config::CoreConfig;
use crate::error::{HmsError, HmsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Proof that the caller holds the store's write lock.
pub(crate) type StoreGuard<'a> = MutexGuard<'a, ()>;

/// Shared handle on the catalogue directory.
///
/// One store is shared by all managers of a process. Its write lock serialises
/// read-modify-write cycles, including the ones that span several catalogues
/// (an exam and its rows, an exam type and the exams that reference it).
#[derive(Debug)]
pub struct CatalogueStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl CatalogueStore {
    pub fn new(cfg: &CoreConfig) -> Self {
        Self {
            data_dir: cfg.data_dir().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Acquires the write lock.
    ///
    /// # Errors
    ///
    /// Returns `HmsError::LockPoisoned` if a previous writer panicked.
    pub(crate) fn lock(&self) -> HmsResult<StoreGuard<'_>> {
        self.write_lock.lock().map_err(|_| HmsError::LockPoisoned)
    }

    /// Reads all records of one catalogue file.
    ///
    /// # Errors
    ///
    /// Returns `HmsError::FileRead` or `HmsError::YamlDeserialization`.
    pub(crate) fn load<T: DeserializeOwned>(&self, filename: &str) -> HmsResult<Vec<T>> {
        let path = self.data_dir.join(filename);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HmsError::FileRead(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            tracing::error!("failed to parse {}: {}", path.display(), e);
            HmsError::YamlDeserialization(e)
        })
    }

    /// Replaces the contents of one catalogue file.
    ///
    /// Requires the write lock so that concurrent writers cannot interleave.
    ///
    /// # Errors
    ///
    /// Returns `HmsError::YamlSerialization` or `HmsError::FileWrite`.
    pub(crate) fn save<T: Serialize>(
        &self,
        guard: &StoreGuard<'_>,
        filename: &str,
        records: &[T],
    ) -> HmsResult<()> {
        let staged = self.stage(guard, filename, records)?;
        self.commit(guard, vec![staged])
    }

    /// Writes the new contents of one catalogue file next to it without
    /// replacing it yet. Nothing is visible to readers until [`Self::commit`].
    ///
    /// # Errors
    ///
    /// Returns `HmsError::YamlSerialization` or `HmsError::FileWrite`.
    pub(crate) fn stage<T: Serialize>(
        &self,
        _guard: &StoreGuard<'_>,
        filename: &str,
        records: &[T],
    ) -> HmsResult<StagedFile> {
        let yaml = serde_yaml::to_string(records).map_err(HmsError::YamlSerialization)?;

        let staged = StagedFile {
            tmp_path: self.data_dir.join(format!(".{filename}.tmp")),
            path: self.data_dir.join(filename),
            records: records.len(),
        };
        fs::write(&staged.tmp_path, yaml).map_err(HmsError::FileWrite)?;
        Ok(staged)
    }

    /// Renames every staged file over its target.
    ///
    /// All files are serialised and written before the first rename, so a
    /// serialisation or disk-full failure leaves every catalogue untouched.
    /// Staged files that were not renamed are removed on failure.
    ///
    /// # Errors
    ///
    /// Returns `HmsError::FileWrite`.
    pub(crate) fn commit(&self, _guard: &StoreGuard<'_>, staged: Vec<StagedFile>) -> HmsResult<()> {
        let mut pending = staged.into_iter();
        while let Some(file) = pending.next() {
            if let Err(e) = fs::rename(&file.tmp_path, &file.path) {
                let _ = fs::remove_file(&file.tmp_path);
                for rest in pending {
                    let _ = fs::remove_file(&rest.tmp_path);
                }
                return Err(HmsError::FileWrite(e));
            }
            tracing::debug!("wrote {} records to {}", file.records, file.path.display());
        }
        Ok(())
    }
}

/// A catalogue file written to its temporary sibling, waiting for
/// [`CatalogueStore::commit`].
#[derive(Debug)]
pub(crate) struct StagedFile {
    tmp_path: PathBuf,
    path: PathBuf,
    records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdmissionType;
    use tempfile::TempDir;

    fn test_store(dir: &Path) -> CatalogueStore {
        let cfg = CoreConfig::new(dir.to_path_buf()).expect("CoreConfig::new should succeed");
        CatalogueStore::new(&cfg)
    }

    #[test]
    fn test_missing_file_is_empty_catalogue() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());

        let records: Vec<AdmissionType> = store.load("absent.yaml").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        let records = vec![
            AdmissionType::new("A", "Ambulance"),
            AdmissionType::new("ZZ", "aDescription"),
        ];

        {
            let guard = store.lock().unwrap();
            store.save(&guard, "admission_types.yaml", &records).unwrap();
        }

        let loaded: Vec<AdmissionType> = store.load("admission_types.yaml").unwrap();
        assert_eq!(loaded, records);
        assert!(!temp_dir.path().join(".admission_types.yaml.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        fs::write(temp_dir.path().join("broken.yaml"), "- code: [unterminated").unwrap();

        let err = store.load::<AdmissionType>("broken.yaml").unwrap_err();
        assert!(matches!(err, HmsError::YamlDeserialization(_)));
    }

    #[test]
    fn test_staged_files_are_invisible_until_commit() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        let guard = store.lock().unwrap();

        let first = store
            .stage(&guard, "a.yaml", &[AdmissionType::new("A", "Ambulance")])
            .unwrap();
        let second = store
            .stage(&guard, "b.yaml", &[AdmissionType::new("B", "Birth")])
            .unwrap();
        assert!(store.load::<AdmissionType>("a.yaml").unwrap().is_empty());
        assert!(store.load::<AdmissionType>("b.yaml").unwrap().is_empty());

        store.commit(&guard, vec![first, second]).unwrap();

        assert_eq!(store.load::<AdmissionType>("a.yaml").unwrap().len(), 1);
        assert_eq!(store.load::<AdmissionType>("b.yaml").unwrap().len(), 1);
        assert!(!temp_dir.path().join(".a.yaml.tmp").exists());
        assert!(!temp_dir.path().join(".b.yaml.tmp").exists());
    }

    #[test]
    fn test_failed_commit_cleans_up_staged_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        let guard = store.lock().unwrap();
        // A directory in the way makes the rename fail.
        fs::create_dir(temp_dir.path().join("a.yaml")).unwrap();
        fs::write(temp_dir.path().join("a.yaml").join("keep"), "x").unwrap();

        let first = store
            .stage(&guard, "a.yaml", &[AdmissionType::new("A", "Ambulance")])
            .unwrap();
        let second = store
            .stage(&guard, "b.yaml", &[AdmissionType::new("B", "Birth")])
            .unwrap();

        let err = store.commit(&guard, vec![first, second]).unwrap_err();
        assert!(matches!(err, HmsError::FileWrite(_)));
        assert!(!temp_dir.path().join("b.yaml").exists());
        assert!(!temp_dir.path().join(".a.yaml.tmp").exists());
        assert!(!temp_dir.path().join(".b.yaml.tmp").exists());
    }
}
