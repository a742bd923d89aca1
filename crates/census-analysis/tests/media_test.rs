//! Media/disk comparison against a real directory tree.

use std::fs;
use std::path::Path;

use census_analysis::media::{check_media, MediaLayout};
use census_core::traits::MemoryStore;
use census_core::types::YearKey;

const PREFIX: &str = "Fed Census: 1940,";
const STORED_DIR: &str = "?\\Records - Census\\1940 Federal";

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"img").unwrap();
}

fn setup() -> (tempfile::TempDir, MediaLayout) {
    let root = tempfile::TempDir::new().unwrap();
    let layout = MediaLayout::new(root.path(), "Records - Census");
    fs::create_dir_all(root.path().join("Records - Census").join("1940 Federal")).unwrap();
    (root, layout)
}

fn year_dir(root: &Path) -> std::path::PathBuf {
    root.join("Records - Census").join("1940 Federal")
}

#[test]
fn test_case_mismatch_is_neither_orphan_nor_missing() {
    let (root, layout) = setup();
    touch(&year_dir(root.path()).join("Photo.JPG"));

    let mut store = MemoryStore::new();
    store
        .add_source(1, "Fed Census: 1940, Ohio, Stark [ED 1, sheet 1A] line 1 Doe, John", "", "", "")
        .add_media(Some(1), STORED_DIR, "photo.jpg");

    let key: YearKey = "1940".parse().unwrap();
    let result = check_media(&key, PREFIX, &store, &layout).unwrap();
    assert_eq!(
        result.case_mismatches,
        vec![("photo.jpg".to_string(), "Photo.JPG".to_string())]
    );
    assert!(result.orphaned_files.is_empty());
    assert!(result.missing_files.is_empty());
    assert_eq!(result.files_on_disk, 1);
    assert_eq!(result.files_in_db, 1);
}

#[test]
fn test_missing_orphaned_and_unlinked_sources() {
    let (root, layout) = setup();
    let dir = year_dir(root.path());
    touch(&dir.join("present.jpg"));
    touch(&dir.join("stray.jpg"));
    touch(&dir.join("other-year-link.jpg"));
    touch(&dir.join(".DS_Store"));
    touch(&dir.join("Adams").join("nested.jpg"));

    let mut store = MemoryStore::new();
    store
        .add_source(1, "Fed Census: 1940, Ohio, Stark", "", "", "")
        .add_source(2, "Fed Census: 1940, Ohio, Summit", "", "", "")
        .add_source(3, "Fed Census: 1940, Ohio, Wayne", "", "", "")
        .add_media(Some(1), STORED_DIR, "present.jpg")
        .add_media(Some(2), STORED_DIR, "gone.jpg")
        .add_media(Some(2), "?\\Elsewhere", "outside.jpg")
        .add_media(Some(2), &format!("{STORED_DIR}\\Adams"), "nested.jpg")
        // Linked to a source of another year, but stored in this folder.
        .add_media(Some(99), STORED_DIR, "other-year-link.jpg");

    let key: YearKey = "1940".parse().unwrap();
    let result = check_media(&key, PREFIX, &store, &layout).unwrap();

    assert_eq!(result.sources_without_media.iter().copied().collect::<Vec<_>>(), vec![3]);
    assert_eq!(result.missing_files, vec![(2, "gone.jpg".to_string())]);
    assert_eq!(result.orphaned_files, vec!["stray.jpg".to_string()]);
    assert!(result.case_mismatches.is_empty());
    assert_eq!(result.files_on_disk, 4);
}

#[test]
fn test_directory_override_from_layout() {
    let root = tempfile::TempDir::new().unwrap();
    let mut layout = MediaLayout::new(root.path(), "Census");
    layout
        .directories
        .insert("1850-slave".to_string(), "Slaves 1850".to_string());
    let dir = root.path().join("Census").join("Slaves 1850");
    touch(&dir.join("owner.jpg"));

    let store = MemoryStore::new();
    let key: YearKey = "1850-slave".parse().unwrap();
    let result = check_media(&key, "Fed Census Slave Schedule: 1850,", &store, &layout).unwrap();
    assert_eq!(result.orphaned_files, vec!["owner.jpg".to_string()]);
}
