//! Tests for the layered configuration system.

use std::sync::Mutex;

use census_core::config::{CensusConfig, CliOverrides};
use census_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CENSUS_ env vars and point HOME at an empty directory so a real
/// user config cannot leak into the tests.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "CENSUS_DATABASE_PATH",
        "CENSUS_MEDIA_ROOT",
        "CENSUS_MEDIA_CHECK",
        "CENSUS_REPORT_INCLUDE_INFO",
        "CENSUS_REPORT_FORMAT",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".census-check");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[media]
census_subdir = "Census Images"
root = "/user/media"
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("census.toml"),
        r#"
[database]
path = "/project/tree.rmtree"

[media]
root = "/project/media"

[report]
format = "verbose"
"#,
    )
    .unwrap();

    std::env::set_var("CENSUS_REPORT_FORMAT", "json");
    std::env::set_var("CENSUS_MEDIA_CHECK", "true");

    let cli = CliOverrides {
        database_path: Some("/cli/tree.rmtree".to_string()),
        ..Default::default()
    };

    let config = CensusConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats project for the database path
    assert_eq!(config.database.path.as_deref(), Some("/cli/tree.rmtree"));
    // Env beats project for the format
    assert_eq!(config.report.effective_format(), "json");
    assert!(config.media.effective_check());
    // Project beats user for the media root
    assert_eq!(config.media.root.as_deref(), Some("/project/media"));
    // User layer survives where nothing overrides it
    assert_eq!(config.media.effective_census_subdir(), "Census Images");

    isolate_env(home.path());
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = CensusConfig::load(dir.path(), None).unwrap();

    assert!(config.database.path.is_none());
    assert_eq!(config.media.effective_census_subdir(), "Records - Census");
    assert!(!config.media.effective_check());
    assert!(!config.report.effective_include_info());
    assert_eq!(config.report.effective_format(), "summary");
}

#[test]
fn test_explicit_config_file_replaces_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("census.toml"), "[report]\nformat = \"verbose\"\n").unwrap();
    let other = dir.path().join("other.toml");
    std::fs::write(&other, "[report]\ninclude_info = true\n").unwrap();

    let cli = CliOverrides {
        config_file: Some(other),
        ..Default::default()
    };
    let config = CensusConfig::load(dir.path(), Some(&cli)).unwrap();
    assert!(config.report.effective_include_info());
    assert_eq!(config.report.effective_format(), "summary");
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let cli = CliOverrides {
        config_file: Some(dir.path().join("nope.toml")),
        ..Default::default()
    };
    let err = CensusConfig::load(dir.path(), Some(&cli)).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("census.toml"), "[media\nroot = ").unwrap();
    let err = CensusConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unknown_format_fails_validation() {
    let config = CensusConfig::from_toml("[report]\nformat = \"xml\"\n").unwrap();
    let err = CensusConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "report.format"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_directory_overrides_merge_and_round_trip() {
    let config = CensusConfig::from_toml(
        r#"
[media.directories]
"1890" = "1890 Federal Fragments"
"#,
    )
    .unwrap();
    assert_eq!(
        config.media.directories.get("1890").map(String::as_str),
        Some("1890 Federal Fragments")
    );

    let serialized = config.to_toml().unwrap();
    let reparsed = CensusConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.media.directories, config.media.directories);
}
