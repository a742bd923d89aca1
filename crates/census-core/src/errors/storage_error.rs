//! Record-source storage errors.

use super::error_code::{self, ErrorCode};

/// Errors raised by the record-source collaborator. These are fatal for a run.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Database not found: {path}")]
    NotFound { path: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::NotFound { .. } => error_code::DB_NOT_FOUND,
        }
    }
}
