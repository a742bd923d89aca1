//! Runner: orchestrates one year's check and folds every finding into a report.

pub mod report;

pub use report::{MediaCounts, Report, ReportParts, ReportStatus};

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use census_core::errors::PipelineError;
use census_core::traits::{JurisdictionLookup, MediaCatalog, NoJurisdictions, SourceStore};
use census_core::types::{QualityHistogram, SourceRow, YearKey};

use crate::cross::{check_cross_fields, CitationTexts};
use crate::media::{check_media, MediaLayout};
use crate::rules::{RuleRegistry, YearRule};
use crate::validate::{
    check_bibliography, check_footnote, check_name, check_short_footnote, Category, Field, Issue,
};

static NO_JURISDICTIONS: NoJurisdictions = NoJurisdictions;

/// Switches for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Emit informational findings (sources with several media files).
    pub include_info: bool,
    /// Compare stored media links against the year's folder.
    pub check_media: bool,
}

/// Result of a run: a complete report, or an unsupported year key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    Report(Box<Report>),
    Unsupported {
        requested: String,
        supported: Vec<String>,
    },
}

impl RunOutcome {
    /// Outcome for a key the registry does not know, listing every supported key.
    pub fn unsupported(requested: &str, registry: &RuleRegistry) -> Self {
        Self::Unsupported {
            requested: requested.to_string(),
            supported: registry
                .supported_keys()
                .iter()
                .map(YearKey::to_string)
                .collect(),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Report(report) => Some(report),
            Self::Unsupported { .. } => None,
        }
    }
}

/// Runs the validators for one year key against a record source.
pub struct Runner<'a> {
    registry: RuleRegistry,
    sources: &'a dyn SourceStore,
    media: Option<(&'a dyn MediaCatalog, MediaLayout)>,
    jurisdictions: &'a dyn JurisdictionLookup,
    options: RunOptions,
}

impl<'a> Runner<'a> {
    pub fn new(sources: &'a dyn SourceStore) -> Self {
        Self {
            registry: RuleRegistry::new(),
            sources,
            media: None,
            jurisdictions: &NO_JURISDICTIONS,
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_jurisdictions(mut self, jurisdictions: &'a dyn JurisdictionLookup) -> Self {
        self.jurisdictions = jurisdictions;
        self
    }

    /// Media catalog and folder layout used when `check_media` is on.
    pub fn with_media(mut self, catalog: &'a dyn MediaCatalog, layout: MediaLayout) -> Self {
        self.media = Some((catalog, layout));
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Check the year key given as text (`"1940"`, `"1850-slave"`).
    pub fn run(&self, requested: &str) -> Result<RunOutcome, PipelineError> {
        match self.registry.resolve(requested) {
            Some(rule) => self.run_rule(rule).map(|r| RunOutcome::Report(Box::new(r))),
            None => {
                warn!(year_key = requested, "unsupported year key");
                Ok(RunOutcome::unsupported(requested, &self.registry))
            }
        }
    }

    fn run_rule(&self, rule: &YearRule) -> Result<Report, PipelineError> {
        let _span = info_span!("census_check", year_key = %rule.key).entered();
        let prefix = rule.name.reference.as_str();

        let rows = self.sources.sources(prefix)?;
        let quality_counts = self.sources.quality_histogram(prefix)?;
        info!(source_count = rows.len(), "validating sources");

        let mut issues = Vec::new();
        let mut media_counts = MediaCounts::default();
        let mut source_names = BTreeMap::new();

        for row in &rows {
            debug!(source_id = row.id, "validating source");
            issues.extend(self.check_row(row, rule));
            media_counts.record(row.media_count);
            issues.extend(self.media_count_issue(row));
            source_names.insert(row.id, row.name.clone());
        }

        issues.extend(quality_issues(&quality_counts, rule));

        let media_check = match (&self.media, self.options.check_media) {
            (Some((catalog, layout)), true) => {
                let result = check_media(&rule.key, prefix, *catalog, layout)?;
                issues.extend(result.to_issues());
                Some(result)
            }
            (None, true) => {
                warn!("media check requested without a media catalog; skipping");
                None
            }
            (_, false) => None,
        };

        let report = Report::build(ReportParts {
            year_key: rule.key,
            description: rule.description.clone(),
            total_sources: rows.len(),
            quality_counts,
            media_counts,
            issues,
            source_names,
            media_check,
        });
        info!(issue_count = report.total_issues, status = report.status().as_str(), "check complete");
        Ok(report)
    }

    fn check_row(&self, row: &SourceRow, rule: &YearRule) -> Vec<Issue> {
        let mut issues = check_name(row.id, &row.name, rule);
        issues.extend(check_footnote(row.id, &row.footnote, rule));
        issues.extend(check_short_footnote(row.id, &row.short_footnote, rule));
        issues.extend(check_bibliography(row.id, &row.bibliography, rule));
        issues.extend(check_cross_fields(
            row.id,
            CitationTexts {
                name: &row.name,
                footnote: &row.footnote,
                short_footnote: &row.short_footnote,
                bibliography: &row.bibliography,
            },
            rule,
            self.jurisdictions,
        ));
        issues
    }

    fn media_count_issue(&self, row: &SourceRow) -> Option<Issue> {
        match row.media_count {
            0 => Some(Issue::warning(
                row.id,
                "no_media",
                Category::Media,
                Field::Media,
                "source has no media attached",
            )),
            n if n >= 2 && self.options.include_info => Some(
                Issue::info(
                    row.id,
                    "multiple_media",
                    Category::Media,
                    Field::Media,
                    format!("source has {n} media files attached"),
                )
                .with_current(n.to_string()),
            ),
            _ => None,
        }
    }
}

/// One warning per quality label that differs from the rule's label.
fn quality_issues(histogram: &QualityHistogram, rule: &YearRule) -> Vec<Issue> {
    histogram
        .iter()
        .filter(|(label, _)| label.as_str() != rule.quality)
        .map(|(label, count)| {
            Issue::warning(
                0,
                "quality_mismatch",
                Category::Quality,
                Field::Quality,
                format!("{count} citation(s) rated '{label}', expected '{}'", rule.quality),
            )
            .with_current(label.clone())
            .with_expected(rule.quality)
        })
        .collect()
}
