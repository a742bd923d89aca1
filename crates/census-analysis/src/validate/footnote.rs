//! Footnote validator.

use crate::extract::extract_from_footnote;
use crate::rules::YearRule;

use super::common::{
    check_double_space, check_ed, check_ending_period, check_familysearch_italics,
    check_numbering, check_reference, check_schedule, normalize_title, FOOTNOTE_FORMS,
};
use super::types::{Category, Field, Issue};

/// Check the full footnote. An empty footnote yields a single finding.
pub fn check_footnote(source_id: i64, footnote: &str, rule: &YearRule) -> Vec<Issue> {
    if footnote.trim().is_empty() {
        return vec![Issue::error(
            source_id,
            "empty_footnote",
            Category::Missing,
            Field::Footnote,
            "footnote is empty",
        )];
    }

    let field_rule = &rule.footnote;
    let components = extract_from_footnote(footnote);
    let mut issues = Vec::new();

    issues.extend(check_reference(source_id, footnote, field_rule, Field::Footnote));
    issues.extend(check_ed(
        source_id,
        Field::Footnote,
        components.enumeration_district.as_deref(),
        field_rule,
        "enumeration district (ED) N",
    ));
    issues.extend(check_numbering(source_id, footnote, field_rule, rule, &FOOTNOTE_FORMS));
    issues.extend(check_schedule(source_id, footnote, field_rule, Field::Footnote));

    if let Some(title) = components.quoted_title.as_deref() {
        let title = normalize_title(title);
        if title != rule.bibliography.title {
            issues.push(
                Issue::warning(
                    source_id,
                    "title_mismatch_footnote",
                    Category::Title,
                    Field::Footnote,
                    format!("quoted title '{title}' differs from '{}'", rule.bibliography.title),
                )
                .with_current(title)
                .with_expected(rule.bibliography.title.clone()),
            );
        }
    }

    issues.extend(check_double_space(source_id, footnote, Field::Footnote));
    issues.extend(check_familysearch_italics(source_id, footnote, Field::Footnote));
    issues.extend(check_ending_period(source_id, footnote, field_rule, Field::Footnote));

    issues
}
