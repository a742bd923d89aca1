//! Per-field validators. Each is a pure function of (source id, text, rule)
//! returning zero or more findings.

pub mod bibliography;
pub mod common;
pub mod footnote;
pub mod name;
pub mod short_footnote;
pub mod states;
pub mod types;

pub use bibliography::check_bibliography;
pub use footnote::check_footnote;
pub use name::check_name;
pub use short_footnote::check_short_footnote;
pub use types::{Category, Field, Issue, Severity};
