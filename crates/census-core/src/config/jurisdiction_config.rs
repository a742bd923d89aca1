//! Jurisdiction reference configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JurisdictionConfig {
    /// TOML file listing independent cities. Unset: the check is skipped.
    pub file: Option<String>,
}
