//! End-to-end runs over an in-memory record source.

use std::fs;

use census_analysis::media::MediaLayout;
use census_analysis::reporters::{available_formats, create_reporter};
use census_analysis::runner::{RunOptions, RunOutcome, Runner};
use census_analysis::validate::Severity;
use census_core::traits::{IndependentCity, MemoryStore, StaticJurisdictions};

const NAME: &str = "Fed Census: 1940, Ohio, Stark [ED 76-95, sheet 5A] line 12 Adams, Verne";
const FOOTNOTE: &str = "1940 U.S. census, population schedule, Stark County, Ohio, Canton, \
    enumeration district (ED) 76-95, sheet 5A, line 12, Verne Adams; imaged, \
    \"United States Census, 1940,\" <i>FamilySearch</i> (https://www.familysearch.org : accessed 2024).";
const SHORT: &str =
    "1940 U.S. census, pop. sch., Stark Co., Ohio, E.D. 76-95, sheet 5A, line 12, Verne Adams.";
const BIB: &str = "U.S. Ohio. Stark County. 1940 U.S Census. Population Schedule. Imaged. \
    \"United States Census, 1940.\" <i>FamilySearch</i> https://www.familysearch.org : 2024.";

fn store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .add_source(1, NAME, FOOTNOTE, SHORT, BIB)
        .add_citation(1, "PDO")
        .add_media(Some(1), "?\\Records - Census\\1940 Federal", "adams.jpg")
        .add_source(2, "Fed Census: 1940, Ohio, Stark [ED 76-95] Baker, Ann", "", "", BIB)
        .add_citation(2, "PDO")
        .add_source(3, "Fed Census: 1930, Ohio, Stark [ED 76-5, sheet 1A] line 2 Cole, Al", "", "", "");
    store
}

#[test]
fn test_clean_source_and_broken_source() {
    let store = store();
    let outcome = Runner::new(&store).run("1940").unwrap();
    let report = outcome.report().unwrap();

    assert_eq!(report.total_sources, 2);
    assert_eq!(report.issues_for(1).count(), 0, "{:?}", report.issues_for(1).collect::<Vec<_>>());
    let broken: Vec<_> = report.issues_for(2).map(|i| i.issue_type.as_str()).collect();
    assert!(broken.contains(&"missing_sheet"));
    assert!(broken.contains(&"missing_line"));
    assert!(broken.contains(&"empty_footnote"));
    assert!(broken.contains(&"no_media"));
    assert!(report.has_errors());
    assert_eq!(report.quality_counts.get("PDO"), Some(&2));
    assert_eq!(report.count(Severity::Info), 0);
    assert_eq!(report.source_name(2), Some("Fed Census: 1940, Ohio, Stark [ED 76-95] Baker, Ann"));
}

#[test]
fn test_runs_are_idempotent() {
    let store = store();
    let runner = Runner::new(&store).with_options(RunOptions { include_info: true, check_media: false });
    let first = runner.run("1940").unwrap();
    let second = runner.run("1940").unwrap();
    assert_eq!(first, second);
    for format in available_formats() {
        let reporter = create_reporter(format).unwrap();
        assert_eq!(reporter.render(&first).unwrap(), reporter.render(&second).unwrap());
    }
}

#[test]
fn test_unsupported_year_outcome() {
    let store = store();
    let outcome = Runner::new(&store).run("1945").unwrap();
    assert!(matches!(outcome, RunOutcome::Unsupported { .. }));
    let line = create_reporter("summary").unwrap().render(&outcome).unwrap();
    assert!(line.starts_with("ERROR | unsupported year '1945' | supported: 1790, 1800,"));
    assert!(line.ends_with("1950, 1850-slave, 1860-slave"));
}

#[test]
fn test_media_check_findings_in_report() {
    let root = tempfile::TempDir::new().unwrap();
    let dir = root.path().join("Records - Census").join("1940 Federal");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Adams.JPG"), b"img").unwrap();
    fs::write(dir.join("unknown.jpg"), b"img").unwrap();

    let store = store();
    let outcome = Runner::new(&store)
        .with_options(RunOptions { include_info: false, check_media: true })
        .with_media(&store, MediaLayout::new(root.path(), "Records - Census"))
        .run("1940")
        .unwrap();
    let report = outcome.report().unwrap();
    assert_eq!(report.by_type.get("media_case_mismatch"), Some(&1));
    assert_eq!(report.by_type.get("orphaned_media_file"), Some(&1));
    assert_eq!(report.by_type.get("missing_media_file"), None);
    let media = report.media_check.as_ref().unwrap();
    assert_eq!(media.sources_without_media.len(), 1);
}

#[test]
fn test_independent_city_lookup_is_injected() {
    let mut store = MemoryStore::new();
    let footnote = "1940 U.S. census, population schedule, Alexandria County, Virginia, \
        enumeration district (ED) 100-1, sheet 2B, line 4, John Doe.";
    store.add_source(
        1,
        "Fed Census: 1940, Virginia, Alexandria [ED 100-1, sheet 2B] line 4 Doe, John",
        footnote,
        "",
        "",
    );
    let cities = StaticJurisdictions::new(vec![IndependentCity {
        state: "Virginia".to_string(),
        name: "Alexandria".to_string(),
        county_pattern: None,
        city_pattern: None,
    }]);

    let without = Runner::new(&store).run("1940").unwrap();
    assert_eq!(without.report().unwrap().by_type.get("independent_city_format"), None);

    let with = Runner::new(&store).with_jurisdictions(&cities).run("1940").unwrap();
    assert_eq!(with.report().unwrap().by_type.get("independent_city_format"), Some(&1));
}
