//! JSON reporter: the report as pretty-printed JSON.

use serde_json::json;

use super::Reporter;
use crate::runner::Report;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let mut value = serde_json::to_value(report).map_err(|e| e.to_string())?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("status".to_string(), json!(report.status().as_str()));
        }
        serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
    }

    fn generate_unsupported(&self, requested: &str, supported: &[String]) -> Result<String, String> {
        let output = json!({
            "status": "ERROR",
            "error": "unsupported_year",
            "requested": requested,
            "supported": supported,
        });
        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
