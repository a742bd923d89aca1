//! # census-cli
//!
//! Command handlers behind the `census-check` binary.
//!
//! ```bash
//! census-check check 1940 --db tree.rmtree
//! census-check check 1850-slave --check-media --media-root ~/Genealogy --format verbose
//! census-check years
//! census-check rules 1880
//! ```
//!
//! Exit codes: 0 no error findings, 1 error findings, 2 unsupported year
//! key, 3 fatal failure (database, media folder, configuration).

pub mod check;
pub mod rules;
pub mod years;

use census_core::errors::{ConfigError, ErrorCode, MediaError, PipelineError, StorageError};

pub const EXIT_CLEAN: u8 = 0;
pub const EXIT_FINDINGS: u8 = 1;
pub const EXIT_UNSUPPORTED: u8 = 2;
pub const EXIT_FATAL: u8 = 3;

/// `[CODE] message` for a fatal error, falling back to `[FATAL]`.
pub fn coded_message(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<PipelineError>() {
        return e.coded_string();
    }
    if let Some(e) = err.downcast_ref::<StorageError>() {
        return e.coded_string();
    }
    if let Some(e) = err.downcast_ref::<MediaError>() {
        return e.coded_string();
    }
    if let Some(e) = err.downcast_ref::<ConfigError>() {
        return e.coded_string();
    }
    format!("[FATAL] {err:#}")
}
