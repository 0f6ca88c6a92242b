//! Schema error types.

use thiserror::Error;

use super::types::Column;

/// Create-time validation failure.
///
/// Reported as a single aggregate warning listing every offending column,
/// not as per-field messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<String> },
}

impl ValidationError {
    /// The offending column headers.
    pub fn missing(&self) -> &[String] {
        match self {
            ValidationError::MissingFields { missing } => missing,
        }
    }
}

/// A malformed row encountered while rebuilding records from cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("invalid value for {column}: '{value}'")]
    BadCell { column: Column, value: String },
}
