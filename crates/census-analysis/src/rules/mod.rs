//! Rule registry: one explicit citation rule record per census year key.

pub mod registry;
pub mod types;

pub use registry::{build_rules, RuleRegistry};
pub use types::*;
