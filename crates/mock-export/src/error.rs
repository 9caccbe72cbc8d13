//! Error types for table export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a table.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The output format could not be inferred from the path.
    #[error("Cannot infer output format from '{0}', pass --format")]
    UnknownFormat(PathBuf),
}
