//! Record store: persistence of the register to a flat CSV file.
//!
//! The backing file holds the full table: one header row in the fixed
//! column order, then one row per record in display order. Loads happen once
//! at startup; every mutation overwrites the whole file (write-through).

pub mod csv;
pub mod errors;
pub mod reader;
pub mod writer;

pub use errors::{StoreError, StoreResult};

use std::path::{Path, PathBuf};

use crate::schema::DocumentRecord;

/// Handle to the backing file.
///
/// Owns the path only; the file is opened per operation. This keeps the
/// write-through point a single auditable call site (`save`) rather than an
/// ambient side effect.
#[derive(Debug, Clone)]
pub struct RegisterStore {
    path: PathBuf,
}

impl RegisterStore {
    /// Creates a store handle for the given backing file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full table from the backing file.
    ///
    /// A missing file is an empty register, not an error. A present file
    /// with a wrong header, wrong cell counts, or unparseable cells fails
    /// with [`StoreError::Corrupt`]; there is no silent reset.
    pub fn load(&self) -> StoreResult<Vec<DocumentRecord>> {
        reader::load(&self.path)
    }

    /// Overwrites the backing file with the full table.
    ///
    /// The write goes to a temp file in the same directory, is synced, and
    /// renamed into place. Failures surface as [`StoreError::Persistence`].
    pub fn save(&self, records: &[DocumentRecord]) -> StoreResult<()> {
        writer::save(&self.path, records)
    }
}
