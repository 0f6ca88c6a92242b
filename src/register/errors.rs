//! Register error types.

use thiserror::Error;

use crate::schema::{RecordId, ValidationError};
use crate::store::StoreError;

/// Result type for register operations.
pub type RegisterResult<T> = Result<T, RegisterError>;

/// Errors raised by register mutations.
///
/// Every variant is local to the operation that raised it: the register
/// stays usable and the caller decides what to do next.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The addressed record does not exist (never created, or deleted).
    #[error("no record with id {0}")]
    UnknownRecord(RecordId),

    /// Create-time validation failed; nothing was appended or written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failed. For mutations this means the in-memory table
    /// holds the new state but the backing file does not.
    #[error(transparent)]
    Store(#[from] StoreError),
}
