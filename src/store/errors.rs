//! Store error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but is not a register: wrong header, wrong
    /// cell count, or a cell outside its vocabulary/format.
    #[error("corrupt backing file '{}': {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The backing file could not be read.
    #[error("failed to read backing file '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file could not be written. The in-memory table is the
    /// last-known-good view and is now ahead of disk.
    #[error("failed to persist register to '{}': {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn read_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a corruption error (as opposed to plain I/O).
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}
