//! Bibliography validator.

use crate::rules::YearRule;

use super::common::{check_double_space, check_familysearch_italics, normalize_title, quoted_title};
use super::types::{Category, Field, Issue};

/// Check the bibliography entry. The quoted title may be the rule's title or
/// any of its alternates.
pub fn check_bibliography(source_id: i64, bibliography: &str, rule: &YearRule) -> Vec<Issue> {
    if bibliography.trim().is_empty() {
        return vec![Issue::error(
            source_id,
            "empty_bibliography",
            Category::Missing,
            Field::Bibliography,
            "bibliography is empty",
        )];
    }

    let mut issues = Vec::new();

    match quoted_title(bibliography) {
        Some(title) => {
            let title = normalize_title(&title);
            if !rule.accepted_titles().any(|accepted| accepted == title) {
                issues.push(
                    Issue::warning(
                        source_id,
                        "title_mismatch_bibliography",
                        Category::Title,
                        Field::Bibliography,
                        format!("quoted title '{title}' differs from '{}'", rule.bibliography.title),
                    )
                    .with_current(title)
                    .with_expected(rule.bibliography.title.clone()),
                );
            }
        }
        None => issues.push(
            Issue::error(
                source_id,
                "missing_title_bibliography",
                Category::Title,
                Field::Bibliography,
                "bibliography has no quoted collection title",
            )
            .with_expected(rule.bibliography.title.clone()),
        ),
    }

    issues.extend(check_double_space(source_id, bibliography, Field::Bibliography));
    issues.extend(check_familysearch_italics(source_id, bibliography, Field::Bibliography));

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleRegistry;
    use census_core::types::YearKey;

    fn rule(key: &str) -> YearRule {
        let key: YearKey = key.parse().unwrap();
        RuleRegistry::new().get(&key).unwrap().clone()
    }

    fn types(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.issue_type.as_str()).collect()
    }

    #[test]
    fn empty_bibliography_is_one_error() {
        assert_eq!(types(&check_bibliography(1, "", &rule("1940"))), vec!["empty_bibliography"]);
    }

    #[test]
    fn main_and_alternate_titles_accepted() {
        let r = rule("1940");
        let main = "U.S. Ohio. Stark County. 1940 U.S Census. Population Schedule. Imaged. \
            \"United States Census, 1940.\" <i>FamilySearch</i> https://www.familysearch.org : 2024.";
        assert!(check_bibliography(1, main, &r).is_empty());

        let alternate = main.replace("United States Census, 1940.", "United States 1940 Census.");
        assert!(check_bibliography(1, &alternate, &r).is_empty());

        let other = main.replace("United States Census, 1940.", "Census Records.");
        assert_eq!(types(&check_bibliography(1, &other, &r)), vec!["title_mismatch_bibliography"]);
    }

    #[test]
    fn missing_title_and_formatting() {
        let text = "U.S. Ohio. Stark County. 1940 U.S Census.  Imaged. FamilySearch.";
        let t = check_bibliography(1, text, &rule("1940"));
        assert_eq!(
            types(&t),
            vec![
                "missing_title_bibliography",
                "double_space_bibliography",
                "familysearch_not_italic_bibliography"
            ]
        );
    }
}
