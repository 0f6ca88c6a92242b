//! Export error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while building export artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The report document could not be assembled or serialized.
    #[error("failed to build report document: {0}")]
    Report(#[from] lopdf::Error),
    /// The report document could not be written to its output buffer.
    #[error("failed to write report document: {0}")]
    Io(#[from] std::io::Error),
}
