//! Database configuration.

use serde::{Deserialize, Serialize};

/// Location of the genealogy database holding the source records.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: Option<String>,
}
