//! Verbose reporter: a multi-section report for people.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::Reporter;
use crate::runner::Report;
use crate::validate::{Issue, Severity};

pub struct VerboseReporter;

impl VerboseReporter {
    fn issue_line(out: &mut String, issue: &Issue) {
        let _ = writeln!(out, "    [{}] {}: {}", issue.severity, issue.issue_type, issue.message);
        if let Some(current) = &issue.current_value {
            let _ = writeln!(out, "        found:    {current}");
        }
        if let Some(expected) = &issue.expected_value {
            let _ = writeln!(out, "        expected: {expected}");
        }
    }
}

impl Reporter for VerboseReporter {
    fn name(&self) -> &'static str {
        "verbose"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let mut out = String::new();
        let rule = "=".repeat(72);

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Census citation check: {}", report.year_key);
        let _ = writeln!(out, "{}", report.description);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Status:   {}", report.status().as_str());
        let _ = writeln!(out, "Sources:  {}", report.total_sources);
        let _ = writeln!(
            out,
            "Issues:   {} ({} errors, {} warnings, {} info)",
            report.total_issues,
            report.count(Severity::Error),
            report.count(Severity::Warning),
            report.count(Severity::Info),
        );
        let _ = writeln!(
            out,
            "Media:    {} without, {} with one, {} with several",
            report.media_counts.none, report.media_counts.one, report.media_counts.many,
        );

        let _ = writeln!(out, "\nCitation quality");
        if report.quality_counts.is_empty() {
            let _ = writeln!(out, "  (no citations)");
        }
        for (label, count) in &report.quality_counts {
            let label = if label.is_empty() { "(blank)" } else { label.as_str() };
            let _ = writeln!(out, "  {label:<10} {count}");
        }

        if !report.by_type.is_empty() {
            let _ = writeln!(out, "\nFindings by type");
            for (issue_type, count) in &report.by_type {
                let _ = writeln!(out, "  {issue_type:<40} {count}");
            }
        }

        let mut by_source: BTreeMap<i64, Vec<&Issue>> = BTreeMap::new();
        for issue in &report.issues {
            by_source.entry(issue.source_id).or_default().push(issue);
        }

        if let Some(run_level) = by_source.remove(&0) {
            let _ = writeln!(out, "\nRun-level findings");
            for issue in run_level {
                Self::issue_line(&mut out, issue);
            }
        }

        if !by_source.is_empty() {
            let _ = writeln!(out, "\nFindings by source");
            for (source_id, issues) in &by_source {
                let name = report.source_name(*source_id).unwrap_or("(unknown source)");
                let _ = writeln!(out, "  #{source_id} {name}");
                for issue in issues {
                    Self::issue_line(&mut out, issue);
                }
            }
        }

        if let Some(media) = &report.media_check {
            let _ = writeln!(out, "\nMedia folder");
            let _ = writeln!(out, "  files on disk:          {}", media.files_on_disk);
            let _ = writeln!(out, "  files in database:      {}", media.files_in_db);
            let _ = writeln!(out, "  sources without media:  {}", media.sources_without_media.len());
            for (source_id, file) in &media.missing_files {
                let _ = writeln!(out, "  missing:   {file} (source #{source_id})");
            }
            for file in &media.orphaned_files {
                let _ = writeln!(out, "  orphaned:  {file}");
            }
            for (stored, disk) in &media.case_mismatches {
                let _ = writeln!(out, "  case:      {stored} -> {disk}");
            }
        }

        Ok(out)
    }
}
