//! Summary reporter: a dense status line for scripts and logs.

use super::Reporter;
use crate::runner::Report;
use crate::validate::Severity;

/// Most frequent finding types listed on the second line.
const TOP_TYPES: usize = 5;

/// `STATUS | N sources | N issues (xE/yW) | quality:PDO=12,SDX=1`
pub struct SummaryReporter;

impl Reporter for SummaryReporter {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let quality = if report.quality_counts.is_empty() {
            "none".to_string()
        } else {
            report
                .quality_counts
                .iter()
                .map(|(label, count)| {
                    let label = if label.is_empty() { "(blank)" } else { label.as_str() };
                    format!("{label}={count}")
                })
                .collect::<Vec<_>>()
                .join(",")
        };

        let mut output = format!(
            "{} | {} sources | {} issues ({}E/{}W) | quality:{}\n",
            report.status().as_str(),
            report.total_sources,
            report.total_issues,
            report.count(Severity::Error),
            report.count(Severity::Warning),
            quality,
        );

        if !report.by_type.is_empty() {
            let mut types: Vec<(&String, &usize)> = report.by_type.iter().collect();
            types.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            let top = types
                .iter()
                .take(TOP_TYPES)
                .map(|(t, n)| format!("{t}={n}"))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("  top: {top}\n"));
        }

        if let Some(media) = &report.media_check {
            output.push_str(&format!(
                "  media: disk={} db={} missing={} orphaned={} case={}\n",
                media.files_on_disk,
                media.files_in_db,
                media.missing_files.len(),
                media.orphaned_files.len(),
                media.case_mismatches.len(),
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{RunOutcome, Runner};
    use census_core::traits::MemoryStore;

    #[test]
    fn status_line_shape() {
        let mut store = MemoryStore::new();
        store
            .add_source(1, "Fed Census: 1940, Ohio, Stark", "", "", "")
            .add_citation(1, "PDO")
            .add_citation(1, "SDX");
        let outcome = Runner::new(&store).run("1940").unwrap();
        let text = SummaryReporter.render(&outcome).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("FAIL | 1 sources | "), "{first}");
        assert!(first.ends_with("| quality:PDO=1,SDX=1"), "{first}");
        assert!(text.lines().nth(1).unwrap().starts_with("  top: "));
    }

    #[test]
    fn unsupported_line() {
        let outcome = RunOutcome::Unsupported {
            requested: "1955".to_string(),
            supported: vec!["1790".to_string(), "1850-slave".to_string()],
        };
        assert_eq!(
            SummaryReporter.render(&outcome).unwrap(),
            "ERROR | unsupported year '1955' | supported: 1790, 1850-slave"
        );
    }
}
