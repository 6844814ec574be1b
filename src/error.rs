//! Error types surfaced by the conversion pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while converting records into a table
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The supplied path does not reference an existing file
    #[error("Input file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// The supplied input is not an array of records
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed JSON in the input document, surfaced unchanged
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// I/O failure while reading the input file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
