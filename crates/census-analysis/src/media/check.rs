//! Compare stored media links against the files in a year's folder.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use census_core::errors::{MediaError, PipelineError};
use census_core::traits::MediaCatalog;
use census_core::types::YearKey;

use super::paths::{path_key, resolve_stored_path, MediaLayout};
use crate::validate::{Category, Field, Issue};

/// Outcome of one media/disk comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaCheckResult {
    pub sources_without_media: BTreeSet<i64>,
    /// (source id, stored file name) for links whose file is not on disk.
    pub missing_files: Vec<(i64, String)>,
    /// File names on disk that no stored link refers to.
    pub orphaned_files: Vec<String>,
    /// (stored name, disk name) pairs differing only in letter case.
    pub case_mismatches: Vec<(String, String)>,
    pub files_on_disk: usize,
    pub files_in_db: usize,
}

impl MediaCheckResult {
    /// Findings for missing, orphaned, and case-mismatched files.
    pub fn to_issues(&self) -> Vec<Issue> {
        let missing = self.missing_files.iter().map(|(source_id, file)| {
            Issue::error(
                *source_id,
                "missing_media_file",
                Category::Media,
                Field::Media,
                format!("linked file '{file}' is not on disk"),
            )
            .with_current(file.clone())
        });
        let orphaned = self.orphaned_files.iter().map(|file| {
            Issue::warning(
                0,
                "orphaned_media_file",
                Category::Media,
                Field::Media,
                format!("file '{file}' is on disk but not linked to any source"),
            )
            .with_current(file.clone())
        });
        let case = self.case_mismatches.iter().map(|(stored, disk)| {
            Issue::warning(
                0,
                "media_case_mismatch",
                Category::Media,
                Field::Media,
                format!("stored name '{stored}' differs from disk name '{disk}' only in case"),
            )
            .with_current(stored.clone())
            .with_expected(disk.clone())
        });
        missing.chain(orphaned).chain(case).collect()
    }
}

/// Run the media/disk comparison for one year key.
pub fn check_media(
    key: &YearKey,
    name_prefix: &str,
    catalog: &dyn MediaCatalog,
    layout: &MediaLayout,
) -> Result<MediaCheckResult, PipelineError> {
    let expected_dir = layout.expected_dir(key);
    let directory_name = layout.directory_name(key);
    if !expected_dir.is_dir() {
        return Err(MediaError::Io {
            path: expected_dir.display().to_string(),
            message: "expected media directory does not exist".to_string(),
        }
        .into());
    }
    let expected_prefix = format!("{}/", path_key(&expected_dir).to_lowercase());

    let disk_files = walk_files(&expected_dir)?;
    let disk_lower: BTreeSet<String> = disk_files.iter().map(|p| p.to_lowercase()).collect();

    let links = catalog.media_links(name_prefix)?;
    let mut result = MediaCheckResult::default();

    // lowercase full path → stored full path
    let mut known: HashMap<String, String> = HashMap::new();

    for (source_id, source_links) in &links {
        if source_links.is_empty() {
            result.sources_without_media.insert(*source_id);
            continue;
        }
        for link in source_links {
            let full = path_key(&resolve_stored_path(&link.path, &layout.root).join(&link.file));
            let lower = full.to_lowercase();
            if !lower.starts_with(&expected_prefix) {
                continue;
            }
            let on_disk = Path::new(&full).exists() || disk_lower.contains(&lower);
            if !on_disk {
                result.missing_files.push((*source_id, link.file.clone()));
            }
            known.entry(lower).or_insert(full);
        }
    }

    for link in catalog.media_mentioning(&directory_name)? {
        let full = path_key(&resolve_stored_path(&link.path, &layout.root).join(&link.file));
        known.entry(full.to_lowercase()).or_insert(full);
    }

    for disk_path in &disk_files {
        let disk_name = file_name(disk_path);
        match known.get(&disk_path.to_lowercase()) {
            None => result.orphaned_files.push(disk_name.to_string()),
            Some(stored) if stored != disk_path => result
                .case_mismatches
                .push((file_name(stored).to_string(), disk_name.to_string())),
            Some(_) => {}
        }
    }

    result.files_on_disk = disk_files.len();
    result.files_in_db = known.len();

    info!(
        media_dir = %expected_dir.display(),
        files_on_disk = result.files_on_disk,
        files_in_db = result.files_in_db,
        missing = result.missing_files.len(),
        orphaned = result.orphaned_files.len(),
        "media check complete"
    );

    Ok(result)
}

/// Every regular file under `dir`, skipping dotfiles, as sorted path keys.
fn walk_files(dir: &Path) -> Result<Vec<String>, MediaError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry.map_err(|e| MediaError::Walk {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "media file on disk");
            files.push(path_key(entry.path()));
        }
    }
    Ok(files)
}

fn file_name(path_key: &str) -> &str {
    path_key.rsplit('/').next().unwrap_or(path_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::traits::MemoryStore;

    #[test]
    fn file_name_takes_last_segment() {
        assert_eq!(file_name("/a/b/Photo.JPG"), "Photo.JPG");
        assert_eq!(file_name("Photo.JPG"), "Photo.JPG");
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::TempDir::new().unwrap();
        let layout = MediaLayout::new(dir.path(), "Records - Census");
        let store = MemoryStore::new();
        let key: YearKey = "1940".parse().unwrap();
        let err = check_media(&key, "Fed Census: 1940,", &store, &layout).unwrap_err();
        assert!(matches!(err, PipelineError::Media(MediaError::Io { .. })));
    }

    #[test]
    fn issues_from_result() {
        let result = MediaCheckResult {
            missing_files: vec![(4, "a.jpg".to_string())],
            orphaned_files: vec!["b.jpg".to_string()],
            case_mismatches: vec![("c.jpg".to_string(), "C.JPG".to_string())],
            ..Default::default()
        };
        let issues = result.to_issues();
        let types: Vec<_> = issues.iter().map(|i| i.issue_type.as_str()).collect();
        assert_eq!(types, vec!["missing_media_file", "orphaned_media_file", "media_case_mismatch"]);
        assert_eq!(issues[0].source_id, 4);
        assert_eq!(issues[1].source_id, 0);
    }
}
