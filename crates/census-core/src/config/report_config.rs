//! Report configuration.

use serde::{Deserialize, Serialize};

/// Formats accepted by `report.format`.
pub const REPORT_FORMATS: &[&str] = &["summary", "verbose", "json"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Emit informational findings (e.g. sources with several media files).
    /// Default: false.
    pub include_info: Option<bool>,
    /// Output format. Default: "summary".
    pub format: Option<String>,
}

impl ReportConfig {
    pub fn effective_include_info(&self) -> bool {
        self.include_info.unwrap_or(false)
    }

    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or("summary")
    }
}
