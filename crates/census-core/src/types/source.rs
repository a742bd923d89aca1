//! Rows and media records handed over by the record-source collaborator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One source record with its four decoded citation texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourceRow {
    pub id: i64,
    /// Identifying name (the source's own title line).
    pub name: String,
    pub footnote: String,
    pub short_footnote: String,
    pub bibliography: String,
    /// Number of media files linked to the source.
    pub media_count: u32,
}

/// A stored media reference: path (possibly `?`-prefixed) plus file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaLink {
    pub path: String,
    pub file: String,
}

impl MediaLink {
    pub fn new(path: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file: file.into(),
        }
    }
}

/// Citation-quality label → number of citations carrying it.
pub type QualityHistogram = BTreeMap<String, usize>;
