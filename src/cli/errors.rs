//! CLI-specific error types.
//!
//! Errors reaching this boundary end the process with a non-zero exit;
//! library errors below it are never fatal to the library itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;
use crate::register::RegisterError;
use crate::store::StoreError;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// Errors raised at the command-line boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("register already initialized ('{}' exists)", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("register not initialized: '{}' not found. Run 'docreg init' first.", .0.display())]
    NotInitialized(PathBuf),

    #[error("invalid value for --{flag}: '{value}'")]
    InvalidValue { flag: &'static str, value: String },

    #[error(transparent)]
    Register(#[from] RegisterError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    pub fn invalid_value(flag: &'static str, value: impl Into<String>) -> Self {
        CliError::InvalidValue {
            flag,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("invalid config JSON: {}", e))
    }
}
