//! Citation-quality rule engine for U.S. Federal Census sources (1790–1950).
//!
//! Pipeline: rule registry → component extraction → per-field validators →
//! cross-field validator → media/disk comparison → report → reporters.

pub mod cross;
pub mod extract;
pub mod media;
pub mod reporters;
pub mod rules;
pub mod runner;
pub mod validate;
