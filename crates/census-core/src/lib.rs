//! Core types, collaborator traits, errors, config, and tracing for the
//! census citation checker.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
