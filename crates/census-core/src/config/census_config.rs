//! Top-level configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::report_config::REPORT_FORMATS;
use super::{DatabaseConfig, JurisdictionConfig, MediaConfig, ReportConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CENSUS_*`)
/// 3. Project config (`census.toml` in the working directory)
/// 4. User config (`~/.census-check/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CensusConfig {
    pub database: DatabaseConfig,
    pub media: MediaConfig,
    pub report: ReportConfig,
    pub jurisdictions: JurisdictionConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file, read in place of the project `census.toml`.
    pub config_file: Option<PathBuf>,
    pub database_path: Option<String>,
    pub media_root: Option<String>,
    pub media_check: Option<bool>,
    pub include_info: Option<bool>,
    pub format: Option<String>,
}

impl CensusConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config, or the file named on the command line
        let explicit = cli_overrides.and_then(|c| c.config_file.clone());
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, &path)?,
            None => {
                let project_config_path = root.join("census.toml");
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CensusConfig) -> Result<(), ConfigError> {
        if let Some(ref format) = config.report.format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!(
                        "unknown format '{format}', expected one of {}",
                        REPORT_FORMATS.join(", ")
                    ),
                });
            }
        }
        if let Some(ref path) = config.database.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "database.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref root) = config.media.root {
            if root.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "media.root".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        for (key, dir) in &config.media.directories {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("media.directories.{key}"),
                    message: "folder name must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.census-check/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".census-check").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CensusConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CensusConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut CensusConfig, other: &CensusConfig) {
        // Database
        if other.database.path.is_some() {
            base.database.path = other.database.path.clone();
        }

        // Media
        if other.media.root.is_some() {
            base.media.root = other.media.root.clone();
        }
        if other.media.census_subdir.is_some() {
            base.media.census_subdir = other.media.census_subdir.clone();
        }
        if other.media.check.is_some() {
            base.media.check = other.media.check;
        }
        for (key, dir) in &other.media.directories {
            base.media.directories.insert(key.clone(), dir.clone());
        }

        // Report
        if other.report.include_info.is_some() {
            base.report.include_info = other.report.include_info;
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }

        // Jurisdictions
        if other.jurisdictions.file.is_some() {
            base.jurisdictions.file = other.jurisdictions.file.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CENSUS_DATABASE_PATH`, `CENSUS_MEDIA_ROOT`, etc.
    fn apply_env_overrides(config: &mut CensusConfig) {
        if let Ok(val) = std::env::var("CENSUS_DATABASE_PATH") {
            config.database.path = Some(val);
        }
        if let Ok(val) = std::env::var("CENSUS_MEDIA_ROOT") {
            config.media.root = Some(val);
        }
        if let Ok(val) = std::env::var("CENSUS_MEDIA_CHECK") {
            if let Ok(v) = val.parse::<bool>() {
                config.media.check = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CENSUS_REPORT_INCLUDE_INFO") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.include_info = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CENSUS_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CensusConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.database_path {
            config.database.path = Some(v.clone());
        }
        if let Some(ref v) = cli.media_root {
            config.media.root = Some(v.clone());
        }
        if let Some(v) = cli.media_check {
            config.media.check = Some(v);
        }
        if let Some(v) = cli.include_info {
            config.report.include_info = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.report.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
