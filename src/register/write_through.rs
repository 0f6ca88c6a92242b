//! Write-through mutation engine.
//!
//! `DocumentRegister` owns the in-memory table and the store handle. Every
//! successful mutation persists the full table synchronously before
//! returning; `persist` is the only call site that touches the backing
//! file after load. If a save fails the mutation has still happened in
//! memory (last-known-good, ahead of disk) and the error propagates to the
//! caller instead of being swallowed.

use crate::observability::Logger;
use crate::schema::{validate, DocumentRecord, RecordId};
use crate::store::RegisterStore;

use super::errors::RegisterResult;
use super::table::Register;

/// The register plus its backing store: the single source of truth for one
/// session.
pub struct DocumentRegister {
    store: RegisterStore,
    table: Register,
}

impl DocumentRegister {
    /// Loads the register from the store. A missing backing file opens an
    /// empty register; a corrupt one fails the open.
    pub fn open(store: RegisterStore) -> RegisterResult<Self> {
        let records = store.load()?;
        let table = Register::from_records(records);
        Logger::info(
            "REGISTER_LOADED",
            &[
                ("path", &store.path().display().to_string()),
                ("records", &table.len().to_string()),
            ],
        );
        Ok(Self { store, table })
    }

    /// The in-memory table.
    pub fn table(&self) -> &Register {
        &self.table
    }

    /// The store handle.
    pub fn store(&self) -> &RegisterStore {
        &self.store
    }

    /// Validates and appends a new record, then persists.
    ///
    /// Validation runs exactly once, here, before the append; the table
    /// itself does not re-check.
    pub fn add(&mut self, candidate: DocumentRecord) -> RegisterResult<RecordId> {
        validate(&candidate)?;
        let id = self.table.append(candidate);
        self.persist()?;
        Logger::info("RECORD_ADDED", &[("id", &id.to_string())]);
        Ok(id)
    }

    /// Replaces all fields of the addressed record verbatim, then persists.
    ///
    /// No re-validation: an edit may blank required fields. The register
    /// preserves that lax contract; a stricter caller runs
    /// [`validate`](crate::schema::validate) itself first.
    pub fn update(&mut self, id: RecordId, record: DocumentRecord) -> RegisterResult<()> {
        self.table.replace(id, record)?;
        self.persist()?;
        Logger::info("RECORD_UPDATED", &[("id", &id.to_string())]);
        Ok(())
    }

    /// Removes the addressed record, then persists.
    pub fn delete(&mut self, id: RecordId) -> RegisterResult<DocumentRecord> {
        let removed = self.table.remove(id)?;
        self.persist()?;
        Logger::info("RECORD_DELETED", &[("id", &id.to_string())]);
        Ok(removed)
    }

    /// The write-through point: flushes the full table to the backing file.
    fn persist(&self) -> RegisterResult<()> {
        self.store.save(&self.table.records()).map_err(|e| {
            Logger::error(
                "REGISTER_SAVE_FAILED",
                &[
                    ("path", &self.store.path().display().to_string()),
                    ("reason", &e.to_string()),
                ],
            );
            e.into()
        })
    }
}

// Convenience re-borrow for query call sites taking &Register.
impl AsRef<Register> for DocumentRegister {
    fn as_ref(&self) -> &Register {
        &self.table
    }
}
