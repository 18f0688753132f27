/// Storage-specific errors
use std::path::PathBuf;
use thiserror::Error;

/// Failures while setting up the database
///
/// Query failures inside the `users` slice are reported as
/// `starter_core::StarterError` directly.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// The directory holding the database file could not be created
    #[error("Failed to create database directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
