//! Collaborator ports consumed by the analysis engine.

pub mod jurisdiction;
pub mod memory_store;
pub mod source_store;

pub use jurisdiction::{IndependentCity, JurisdictionLookup, NoJurisdictions, StaticJurisdictions};
pub use memory_store::MemoryStore;
pub use source_store::{MediaCatalog, SourceStore};
