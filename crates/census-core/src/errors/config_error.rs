//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while loading `census.toml`, the user config, the
/// jurisdiction file, or resolving settings a command needs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}")]
    FileNotFound { path: String },

    #[error("malformed TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("{field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("{field} has an invalid value: {message}")]
    InvalidValue { field: String, message: String },

    /// A setting the requested command cannot run without.
    #[error("{field} is not set ({hint})")]
    MissingSetting { field: String, hint: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
