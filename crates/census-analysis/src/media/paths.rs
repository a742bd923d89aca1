//! Stored media path resolution and per-year folder naming.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use census_core::config::MediaConfig;
use census_core::types::YearKey;

/// Where one year's census images are expected on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLayout {
    /// Directory substituted for the `?` placeholder.
    pub root: PathBuf,
    /// Folder under `root` holding the per-year folders.
    pub census_subdir: String,
    /// Year key → folder name overrides from configuration.
    pub directories: BTreeMap<String, String>,
}

impl MediaLayout {
    pub fn new(root: impl Into<PathBuf>, census_subdir: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            census_subdir: census_subdir.into(),
            directories: BTreeMap::new(),
        }
    }

    /// Layout from configuration; `None` when no media root is configured.
    pub fn from_config(config: &MediaConfig) -> Option<Self> {
        let root = config.root_path()?;
        Some(Self {
            root,
            census_subdir: config.effective_census_subdir().to_string(),
            directories: config.directories.clone(),
        })
    }

    /// Folder name for a year key: configured override, then the fixed
    /// table, then `"{year} Federal"`.
    pub fn directory_name(&self, key: &YearKey) -> String {
        if let Some(name) = self.directories.get(&key.to_string()) {
            return name.clone();
        }
        default_directory_name(key)
    }

    pub fn expected_dir(&self, key: &YearKey) -> PathBuf {
        self.root.join(&self.census_subdir).join(self.directory_name(key))
    }
}

/// Built-in folder name for a year key.
pub fn default_directory_name(key: &YearKey) -> String {
    match key {
        YearKey::Year(year) => format!("{year} Federal"),
        YearKey::Variant(year, variant) => {
            format!("{year} Federal {} Schedule", capitalize(variant.as_str()))
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve a stored media path. A leading `?` stands for the media root;
/// backslashes become forward slashes.
pub fn resolve_stored_path(stored: &str, root: &Path) -> PathBuf {
    let normalized = stored.trim().replace('\\', "/");
    match normalized.strip_prefix('?') {
        Some(rest) => {
            let rest = rest.trim_start_matches('/');
            if rest.is_empty() {
                root.to_path_buf()
            } else {
                root.join(rest)
            }
        }
        None => PathBuf::from(normalized),
    }
}

/// Forward-slash string form used for path comparisons.
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
