//! LUT error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid LUT size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Parse error when loading LUT files.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Failed to write a LUT file; carries the attempted path.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path the write was attempted at
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
