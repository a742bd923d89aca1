//! Reporters: render a report for people or machines.
//!
//! Formats: dense summary line, verbose multi-section report, JSON.

pub mod json;
pub mod summary;
pub mod verbose;

use crate::runner::{Report, RunOutcome};

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &Report) -> Result<String, String>;

    /// Output for a year key with no rule.
    fn generate_unsupported(&self, requested: &str, supported: &[String]) -> Result<String, String> {
        Ok(format!(
            "ERROR | unsupported year '{requested}' | supported: {}",
            supported.join(", ")
        ))
    }

    fn render(&self, outcome: &RunOutcome) -> Result<String, String> {
        match outcome {
            RunOutcome::Report(report) => self.generate(report),
            RunOutcome::Unsupported { requested, supported } => {
                self.generate_unsupported(requested, supported)
            }
        }
    }
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "summary" => Some(Box::new(summary::SummaryReporter)),
        "verbose" => Some(Box::new(verbose::VerboseReporter)),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["summary", "verbose", "json"]
}
