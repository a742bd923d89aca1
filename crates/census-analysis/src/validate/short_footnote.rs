//! Short-footnote validator. Same checks as the footnote against the
//! abbreviated forms ("E.D.", "p.", "ln.", "pop. sch.").

use crate::extract::extract_from_short_footnote;
use crate::rules::YearRule;

use super::common::{
    check_double_space, check_ed, check_ending_period, check_familysearch_italics,
    check_numbering, check_reference, check_schedule, normalize_title, SHORT_FOOTNOTE_FORMS,
};
use super::types::{Category, Field, Issue};

/// Check the short footnote. An empty short footnote is allowed.
pub fn check_short_footnote(source_id: i64, short_footnote: &str, rule: &YearRule) -> Vec<Issue> {
    if short_footnote.trim().is_empty() {
        return Vec::new();
    }

    let field_rule = &rule.short_footnote;
    let components = extract_from_short_footnote(short_footnote);
    let mut issues = Vec::new();

    issues.extend(check_reference(source_id, short_footnote, field_rule, Field::ShortFootnote));
    issues.extend(check_ed(
        source_id,
        Field::ShortFootnote,
        components.enumeration_district.as_deref(),
        field_rule,
        "E.D. N",
    ));
    issues.extend(check_numbering(
        source_id,
        short_footnote,
        field_rule,
        rule,
        &SHORT_FOOTNOTE_FORMS,
    ));
    issues.extend(check_schedule(source_id, short_footnote, field_rule, Field::ShortFootnote));

    if let Some(title) = components.quoted_title.as_deref() {
        let title = normalize_title(title);
        if title != rule.bibliography.title {
            issues.push(
                Issue::warning(
                    source_id,
                    "title_mismatch_short_footnote",
                    Category::Title,
                    Field::ShortFootnote,
                    format!("quoted title '{title}' differs from '{}'", rule.bibliography.title),
                )
                .with_current(title)
                .with_expected(rule.bibliography.title.clone()),
            );
        }
    }

    issues.extend(check_double_space(source_id, short_footnote, Field::ShortFootnote));
    issues.extend(check_familysearch_italics(source_id, short_footnote, Field::ShortFootnote));
    issues.extend(check_ending_period(source_id, short_footnote, field_rule, Field::ShortFootnote));

    issues
}
