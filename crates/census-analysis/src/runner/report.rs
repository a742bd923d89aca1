//! The report produced by one run.

use std::collections::BTreeMap;

use serde::Serialize;

use census_core::types::{QualityHistogram, YearKey};

use crate::media::MediaCheckResult;
use crate::validate::{Issue, Severity};

/// Sources bucketed by how many media files they link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaCounts {
    pub none: usize,
    pub one: usize,
    pub many: usize,
}

impl MediaCounts {
    pub fn record(&mut self, media_count: u32) {
        match media_count {
            0 => self.none += 1,
            1 => self.one += 1,
            _ => self.many += 1,
        }
    }
}

/// Overall verdict of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Pass,
    Warn,
    Fail,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
        }
    }
}

/// Everything one run found. Built once, then handed to reporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub year_key: YearKey,
    pub description: String,
    pub total_sources: usize,
    pub total_issues: usize,
    pub by_severity: BTreeMap<Severity, usize>,
    pub by_type: BTreeMap<String, usize>,
    pub quality_counts: QualityHistogram,
    pub media_counts: MediaCounts,
    pub issues: Vec<Issue>,
    pub source_names: BTreeMap<i64, String>,
    pub media_check: Option<MediaCheckResult>,
}

/// Inputs folded into a [`Report`].
#[derive(Debug, Clone)]
pub struct ReportParts {
    pub year_key: YearKey,
    pub description: String,
    pub total_sources: usize,
    pub quality_counts: QualityHistogram,
    pub media_counts: MediaCounts,
    pub issues: Vec<Issue>,
    pub source_names: BTreeMap<i64, String>,
    pub media_check: Option<MediaCheckResult>,
}

impl Report {
    /// Fold findings into severity and type counts.
    pub fn build(parts: ReportParts) -> Self {
        let mut by_severity: BTreeMap<Severity, usize> =
            Severity::all().into_iter().map(|s| (s, 0)).collect();
        let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
        for issue in &parts.issues {
            *by_severity.entry(issue.severity).or_insert(0) += 1;
            *by_type.entry(issue.issue_type.clone()).or_insert(0) += 1;
        }

        Self {
            year_key: parts.year_key,
            description: parts.description,
            total_sources: parts.total_sources,
            total_issues: parts.issues.len(),
            by_severity,
            by_type,
            quality_counts: parts.quality_counts,
            media_counts: parts.media_counts,
            issues: parts.issues,
            source_names: parts.source_names,
            media_check: parts.media_check,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn status(&self) -> ReportStatus {
        if self.has_errors() {
            ReportStatus::Fail
        } else if self.count(Severity::Warning) > 0 {
            ReportStatus::Warn
        } else {
            ReportStatus::Pass
        }
    }

    /// Findings of one source, in the order they were produced.
    pub fn issues_for(&self, source_id: i64) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.source_id == source_id)
    }

    pub fn source_name(&self, source_id: i64) -> Option<&str> {
        self.source_names.get(&source_id).map(String::as_str)
    }
}
