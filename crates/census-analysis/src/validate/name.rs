//! Identifying-name validator.

use crate::extract::{extract_from_name, ExtractedComponents};
use crate::rules::YearRule;

use super::common::{check_ed, check_numbering, NAME_FORMS};
use super::states::{is_valid_state, suggest_state};
use super::types::{Category, Field, Issue};

/// Check the identifying name (e.g. `Fed Census: 1940, Ohio, Stark [ED 76-95, sheet 5A] …`).
pub fn check_name(source_id: i64, name: &str, rule: &YearRule) -> Vec<Issue> {
    let field_rule = &rule.name;
    let components = extract_from_name(name);
    let mut issues = Vec::new();

    if !name.starts_with(&field_rule.reference) {
        issues.push(
            Issue::error(
                source_id,
                "wrong_prefix",
                Category::Format,
                Field::Name,
                format!("name must start with \"{}\"", field_rule.reference),
            )
            .with_current(name.chars().take(field_rule.reference.chars().count()).collect::<String>())
            .with_expected(field_rule.reference.clone()),
        );
    }

    issues.extend(check_ed(
        source_id,
        Field::Name,
        components.enumeration_district.as_deref(),
        field_rule,
        "[ED N,",
    ));
    issues.extend(check_numbering(source_id, name, field_rule, rule, &NAME_FORMS));
    issues.extend(check_state(source_id, &components));

    issues
}

fn check_state(source_id: i64, components: &ExtractedComponents) -> Option<Issue> {
    let state = components.state.as_deref()?;
    if is_valid_state(state) {
        return None;
    }
    let issue = match suggest_state(state) {
        Some(suggestion) => Issue::error(
            source_id,
            "state_name_typo",
            Category::Typo,
            Field::Name,
            format!("'{state}' looks like a misspelling of '{suggestion}'"),
        )
        .with_expected(suggestion),
        None => Issue::error(
            source_id,
            "invalid_state",
            Category::Format,
            Field::Name,
            format!("'{state}' is not a recognized state or territory"),
        ),
    };
    Some(issue.with_current(state))
}
