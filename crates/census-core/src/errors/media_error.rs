//! Media directory errors.

use super::error_code::{self, ErrorCode};

/// Filesystem failures while inspecting a media directory.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Directory walk failed under {path}: {message}")]
    Walk { path: String, message: String },
}

impl ErrorCode for MediaError {
    fn error_code(&self) -> &'static str {
        error_code::MEDIA_ERROR
    }
}
