//! Keyed record operations shared by the simple code tables.

use super::store::{CatalogueStore, StoreGuard};
use crate::domain::{CatalogueKind, Coded};
use crate::error::{HmsError, HmsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// One catalogue file viewed as a table of records keyed by code.
///
/// Records are kept sorted by code on every write.
#[derive(Debug)]
pub(crate) struct CodeTable<T> {
    store: Arc<CatalogueStore>,
    filename: &'static str,
    kind: CatalogueKind,
    _record: PhantomData<fn() -> T>,
}

impl<T> CodeTable<T>
where
    T: Coded + Clone + Serialize + DeserializeOwned,
{
    pub(crate) fn new(store: Arc<CatalogueStore>, filename: &'static str, kind: CatalogueKind) -> Self {
        Self {
            store,
            filename,
            kind,
            _record: PhantomData,
        }
    }

    pub(crate) fn store(&self) -> &CatalogueStore {
        &self.store
    }

    pub(crate) fn list(&self) -> HmsResult<Vec<T>> {
        self.store.load(self.filename)
    }

    pub(crate) fn contains(&self, code: &str) -> HmsResult<bool> {
        Ok(self.list()?.iter().any(|r| r.code() == code))
    }

    pub(crate) fn insert(&self, record: T) -> HmsResult<T> {
        let guard = self.store.lock()?;
        let mut records = self.list()?;

        if records.iter().any(|r| r.code() == record.code()) {
            return Err(HmsError::duplicate(self.kind, record.code()));
        }

        records.push(record.clone());
        self.write(&guard, records)?;
        tracing::info!("created {} {}", self.kind, record.code());
        Ok(record)
    }

    pub(crate) fn replace(&self, record: T) -> HmsResult<T> {
        let guard = self.store.lock()?;
        let mut records = self.list()?;

        let slot = records
            .iter_mut()
            .find(|r| r.code() == record.code())
            .ok_or_else(|| HmsError::not_found(self.kind, record.code()))?;
        *slot = record.clone();

        self.write(&guard, records)?;
        tracing::info!("updated {} {}", self.kind, record.code());
        Ok(record)
    }

    pub(crate) fn remove(&self, code: &str) -> HmsResult<()> {
        let guard = self.store.lock()?;
        self.remove_locked(&guard, code)
    }

    /// Removal for callers that already hold the lock to run their own checks.
    pub(crate) fn remove_locked(&self, guard: &StoreGuard<'_>, code: &str) -> HmsResult<()> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|r| r.code() != code);

        if records.len() == before {
            return Err(HmsError::not_found(self.kind, code));
        }

        self.write(guard, records)?;
        tracing::info!("deleted {} {}", self.kind, code);
        Ok(())
    }

    fn write(&self, guard: &StoreGuard<'_>, mut records: Vec<T>) -> HmsResult<()> {
        records.sort_by(|a, b| a.code().cmp(b.code()));
        self.store.save(guard, self.filename, &records)
    }
}
