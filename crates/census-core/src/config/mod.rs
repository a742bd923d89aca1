//! Configuration system for the census checker.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod census_config;
pub mod database_config;
pub mod jurisdiction_config;
pub mod media_config;
pub mod report_config;

pub use census_config::{CensusConfig, CliOverrides};
pub use database_config::DatabaseConfig;
pub use jurisdiction_config::JurisdictionConfig;
pub use media_config::MediaConfig;
pub use report_config::ReportConfig;
