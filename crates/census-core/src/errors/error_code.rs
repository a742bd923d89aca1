//! ErrorCode trait for structured failure output.

/// Stable error code strings, printed by the CLI as `[CODE] message`.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_NOT_FOUND: &str = "DB_NOT_FOUND";
pub const MEDIA_ERROR: &str = "MEDIA_ERROR";
