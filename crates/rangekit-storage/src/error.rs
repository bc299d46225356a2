//! Error types for the storage crate.

use std::io;
use thiserror::Error;

/// Errors that can occur during chart persistence.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A chart id was not present in the store.
    #[error("Chart not found: {id}")]
    ChartNotFound { id: String },

    /// A backup file declared a version this build does not understand.
    #[error("Unsupported backup version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The platform data directory could not be resolved.
    #[error("Data directory error: {0}")]
    DataDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
