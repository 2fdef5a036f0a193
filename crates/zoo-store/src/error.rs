//! Storage error types for zoo-store.

use std::path::PathBuf;

use thiserror::Error;
use zoo_core::errors::CoreError;

/// Errors from snapshot storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure reading or writing the project directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not valid JSON for the expected shape.
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// No snapshot file exists yet.
    #[error("No zoo found at {}; run `zoo init` first", .0.display())]
    NotInitialized(PathBuf),

    /// Invalid state encountered (duplicate ids, double init).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A referenced entity is missing at commit time.
    #[error(transparent)]
    Core(#[from] CoreError),
}
