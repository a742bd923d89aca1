//! Media directory configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where media files live and whether to compare them against the database.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MediaConfig {
    /// Directory substituted for the `?` placeholder in stored media paths.
    pub root: Option<String>,
    /// Folder under `root` holding the per-year census folders.
    /// Default: "Records - Census".
    pub census_subdir: Option<String>,
    /// Run the media/disk comparison. Default: false.
    pub check: Option<bool>,
    /// Year key → folder name overrides, merged over the built-in table.
    #[serde(default)]
    pub directories: BTreeMap<String, String>,
}

impl MediaConfig {
    pub fn effective_census_subdir(&self) -> &str {
        self.census_subdir.as_deref().unwrap_or("Records - Census")
    }

    pub fn effective_check(&self) -> bool {
        self.check.unwrap_or(false)
    }

    pub fn root_path(&self) -> Option<PathBuf> {
        self.root.as_ref().map(PathBuf::from)
    }
}
