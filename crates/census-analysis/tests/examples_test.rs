//! Behaviour of the validators on representative citations.

use census_analysis::cross::{check_cross_fields, CitationTexts};
use census_analysis::rules::{RuleRegistry, YearRule};
use census_analysis::validate::{
    check_bibliography, check_footnote, check_name, check_short_footnote, Issue,
};
use census_core::traits::NoJurisdictions;
use census_core::types::YearKey;

fn rule(key: &str) -> YearRule {
    let key: YearKey = key.parse().unwrap();
    RuleRegistry::new().get(&key).unwrap().clone()
}

fn types(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.issue_type.as_str()).collect()
}

#[test]
fn test_every_rule_sets_every_requirement() {
    let registry = RuleRegistry::new();
    assert_eq!(registry.len(), 19);
    for (key, rule) in registry.iter() {
        for group in [&rule.name, &rule.footnote, &rule.short_footnote] {
            assert!(!group.reference.is_empty(), "{key}: empty reference");
            assert_eq!(group.requires_ed, group.ed_format.is_some(), "{key}: ED flag and format disagree");
            if group.requires_schedule {
                assert!(!group.schedule_variants.is_empty(), "{key}: schedule without variants");
            }
        }
        assert!(!rule.bibliography.title.is_empty(), "{key}: empty title");
        assert!(!rule.quality.is_empty(), "{key}: empty quality label");
    }
}

#[test]
fn test_1940_name_has_no_missing_parts() {
    let issues = check_name(
        1,
        "Fed Census: 1940, Ohio, Stark [ED 23A-24B, sheet 5A] line 12 Adams, Verne",
        &rule("1940"),
    );
    for t in ["wrong_prefix", "missing_ed", "invalid_ed_format", "missing_sheet", "missing_line"] {
        assert!(!types(&issues).contains(&t), "unexpected {t}");
    }
}

#[test]
fn test_1880_name_uses_page_not_sheet_or_stamp() {
    let r = rule("1880");
    let with_page = check_name(1, "Fed Census: 1880, Ohio, Stark [ED 95, page 12] line 3 Adams, Verne", &r);
    assert!(!types(&with_page).iter().any(|t| t.contains("sheet") || t.contains("stamp")));
    assert!(!types(&with_page).contains(&"missing_page"));

    let without = check_name(1, "Fed Census: 1880, Ohio, Stark [ED 95, p. 12] line 3 Adams, Verne", &r);
    assert!(types(&without).contains(&"missing_page"));
    assert!(!types(&without).iter().any(|t| t.contains("sheet") || t.contains("stamp")));
}

#[test]
fn test_1950_sheet_with_line_or_stamp_without_line() {
    let r = rule("1950");
    let sheet = check_name(1, "Fed Census: 1950, Ohio, Stark [ED 76-95, sheet 5] line 12 Adams, Verne", &r);
    assert!(sheet.is_empty(), "{sheet:?}");
    let stamp = check_name(1, "Fed Census: 1950, Ohio, Stark [ED 76-95, stamp 7] Adams, Verne", &r);
    assert!(stamp.is_empty(), "{stamp:?}");
}

#[test]
fn test_stamped_page_footnote_against_1880_and_1950() {
    let text = "1950 U.S. census, Ohio, Stark, page 5 (stamped), Adams";
    let as_1880 = check_footnote(1, text, &rule("1880"));
    assert!(!types(&as_1880).contains(&"missing_page_stamped_footnote"));
    let as_1950 = check_footnote(1, text, &rule("1950"));
    assert!(types(&as_1950).contains(&"missing_ed_footnote"));
}

#[test]
fn test_state_typo_suggestion() {
    let issues = check_name(
        1,
        "Fed Census: 1940, Calfornia, Kern [ED 15-1, sheet 2A] line 3 Doe, John",
        &rule("1940"),
    );
    let typo = issues.iter().find(|i| i.issue_type == "state_name_typo").unwrap();
    assert_eq!(typo.expected_value.as_deref(), Some("California"));
}

#[test]
fn test_empty_texts() {
    let r = rule("1940");
    assert!(check_short_footnote(1, "", &r).is_empty());
    assert_eq!(types(&check_footnote(1, "", &r)), vec!["empty_footnote"]);
    assert_eq!(types(&check_bibliography(1, "", &r)), vec!["empty_bibliography"]);
}

#[test]
fn test_ed_mismatch_ignores_suffix_case_and_leading_zeros() {
    let r = rule("1940");
    let footnote_for = |ed: &str| {
        format!(
            "1940 U.S. census, population schedule, Stark County, Ohio, enumeration district (ED) {ed}, \
             sheet 5A, line 12, Verne Adams."
        )
    };
    let name_for = |ed: &str| format!("Fed Census: 1940, Ohio, Stark [ED {ed}, sheet 5A] line 12 Adams, Verne");

    for (name_ed, footnote_ed) in [("95A", "95a"), ("095", "95"), ("12-095", "12-95")] {
        let name = name_for(name_ed);
        let footnote = footnote_for(footnote_ed);
        let texts = CitationTexts { name: &name, footnote: &footnote, short_footnote: "", bibliography: "" };
        let issues = check_cross_fields(1, texts, &r, &NoJurisdictions);
        assert!(!types(&issues).contains(&"ed_mismatch"), "{name_ed} vs {footnote_ed}");
    }

    let name = name_for("95");
    let footnote = footnote_for("96");
    let texts = CitationTexts { name: &name, footnote: &footnote, short_footnote: "", bibliography: "" };
    assert_eq!(types(&check_cross_fields(1, texts, &r, &NoJurisdictions)), vec!["ed_mismatch"]);
}
