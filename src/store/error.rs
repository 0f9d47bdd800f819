//! Storage error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists with the given id.
    #[error("Blog post {id} not found")]
    NotFound { id: i64 },

    /// A required field was missing or empty.
    #[error("Field '{field}' must not be empty")]
    Validation { field: &'static str },

    /// Failed to create the data directory for the database file.
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Underlying SQLite failure.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
