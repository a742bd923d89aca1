//! Read-only SQLite record source for the census citation checker.
//!
//! Reads source rows, citation-quality labels, and media links out of a
//! genealogy database and hands them to the analysis crate through the
//! `SourceStore` and `MediaCatalog` traits.

pub mod connection;
pub mod fields;
pub mod queries;

pub use connection::SqliteSourceStore;
pub use fields::{decode_fields, CitationFields};
