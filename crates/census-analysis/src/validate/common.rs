//! Checks shared by the per-field validators.

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::patterns::{self, capture, is_match};
use crate::rules::{FieldRule, YearRule};

use super::types::{Category, Field, Issue};

const FAMILYSEARCH: &str = "FamilySearch";
const ITALIC_PLAIN: (&str, &str) = ("<i>", "</i>");
const ITALIC_ESCAPED: (&str, &str) = ("&lt;i&gt;", "&lt;/i&gt;");

/// Patterns a representation uses for its numbering terms.
pub(crate) struct NumberingForms {
    pub field: Field,
    pub page: &'static LazyLock<Option<Regex>>,
    pub page_stamped: &'static LazyLock<Option<Regex>>,
    pub line: &'static LazyLock<Option<Regex>>,
    pub family: &'static LazyLock<Option<Regex>>,
    /// Phrase shown in messages, e.g. "page N" or "page/p. N".
    pub page_label: &'static str,
}

pub(crate) static NAME_FORMS: NumberingForms = NumberingForms {
    field: Field::Name,
    page: &patterns::RE_PAGE,
    page_stamped: &patterns::RE_PAGE_STAMPED,
    line: &patterns::RE_LINE,
    family: &patterns::RE_FAMILY,
    page_label: "page N",
};

pub(crate) static FOOTNOTE_FORMS: NumberingForms = NumberingForms {
    field: Field::Footnote,
    page: &patterns::RE_PAGE,
    page_stamped: &patterns::RE_PAGE_STAMPED,
    line: &patterns::RE_LINE,
    family: &patterns::RE_FAMILY,
    page_label: "page N",
};

pub(crate) static SHORT_FOOTNOTE_FORMS: NumberingForms = NumberingForms {
    field: Field::ShortFootnote,
    page: &patterns::RE_SHORT_PAGE,
    page_stamped: &patterns::RE_SHORT_PAGE_STAMPED,
    line: &patterns::RE_SHORT_LINE,
    family: &patterns::RE_SHORT_FAMILY,
    page_label: "page/p. N",
};

fn issue_type(base: &str, field: Field) -> String {
    format!("{base}{}", field.issue_suffix())
}

/// Page, sheet, stamp, line and family requirements.
///
/// Years up to 1880 always cite "page N" and never consult the sheet or stamp
/// flags. Footnotes of 1880 must say "page N (stamped)" instead. Stamped pages
/// in an identifying name are not required.
pub(crate) fn check_numbering(
    source_id: i64,
    text: &str,
    field_rule: &FieldRule,
    rule: &YearRule,
    forms: &NumberingForms,
) -> Vec<Issue> {
    let field = forms.field;
    let mut issues = Vec::new();
    let mut sheet_present = false;

    if rule.uses_page_numbers() {
        if rule.uses_stamped_page() && field != Field::Name {
            if !is_match(forms.page_stamped, text) {
                issues.push(
                    Issue::error(
                        source_id,
                        issue_type("missing_page_stamped", field),
                        Category::Missing,
                        field,
                        format!("{field} must cite the stamped page as \"{} (stamped)\"", forms.page_label),
                    )
                    .with_expected(format!("{} (stamped)", forms.page_label)),
                );
            }
        } else if !is_match(forms.page, text) {
            issues.push(
                Issue::error(
                    source_id,
                    issue_type("missing_page", field),
                    Category::Missing,
                    field,
                    format!("{field} is missing \"{}\"", forms.page_label),
                )
                .with_expected(forms.page_label),
            );
        }
    } else {
        sheet_present = is_match(&patterns::RE_SHEET, text);
        let stamp_present = is_match(&patterns::RE_STAMP, text);

        if field_rule.sheet_or_stamp {
            if !sheet_present && !stamp_present {
                issues.push(Issue::error(
                    source_id,
                    issue_type("missing_sheet_or_stamp", field),
                    Category::Missing,
                    field,
                    format!("{field} needs either \"sheet N\" or \"stamp N\""),
                ));
            }
        } else {
            if field_rule.requires_sheet && !sheet_present {
                issues.push(Issue::error(
                    source_id,
                    issue_type("missing_sheet", field),
                    Category::Missing,
                    field,
                    format!("{field} is missing \"sheet N\""),
                ));
            }
            if field_rule.requires_stamp && !stamp_present {
                issues.push(Issue::error(
                    source_id,
                    issue_type("missing_stamp", field),
                    Category::Missing,
                    field,
                    format!("{field} is missing \"stamp N\""),
                ));
            }
        }
    }

    let line_required = field_rule.requires_line
        && (!field_rule.line_only_with_sheet || sheet_present);
    if line_required && !is_match(forms.line, text) {
        issues.push(Issue::error(
            source_id,
            issue_type("missing_line", field),
            Category::Missing,
            field,
            format!("{field} is missing a line number"),
        ));
    }

    if field_rule.requires_family
        && !is_match(forms.family, text)
        && !is_match(&patterns::RE_HOUSEHOLD, text)
    {
        issues.push(Issue::error(
            source_id,
            issue_type("missing_family", field),
            Category::Missing,
            field,
            format!("{field} needs \"family N\" or \"household ID N\""),
        ));
    }

    issues
}

/// Presence and shape of the enumeration district.
pub(crate) fn check_ed(
    source_id: i64,
    field: Field,
    ed: Option<&str>,
    field_rule: &FieldRule,
    marker: &str,
) -> Option<Issue> {
    if !field_rule.requires_ed {
        return None;
    }
    let Some(ed) = ed else {
        return Some(Issue::error(
            source_id,
            issue_type("missing_ed", field),
            Category::Missing,
            field,
            format!("{field} is missing the enumeration district (\"{marker}\")"),
        ));
    };
    let format = field_rule.ed_format?;
    (!format.accepts(ed)).then(|| {
        Issue::error(
            source_id,
            issue_type("invalid_ed_format", field),
            Category::Format,
            field,
            format!("enumeration district '{ed}' does not match the expected form (e.g. {})", format.example()),
        )
        .with_current(ed)
        .with_expected(format.example())
    })
}

pub(crate) fn check_schedule(
    source_id: i64,
    text: &str,
    field_rule: &FieldRule,
    field: Field,
) -> Option<Issue> {
    if !field_rule.requires_schedule {
        return None;
    }
    let lower = text.to_lowercase();
    if field_rule
        .schedule_variants
        .iter()
        .any(|v| lower.contains(&v.to_lowercase()))
    {
        return None;
    }
    Some(
        Issue::error(
            source_id,
            issue_type("missing_schedule", field),
            Category::Missing,
            field,
            format!("{field} does not name the schedule"),
        )
        .with_expected(field_rule.schedule_variants.join(" | ")),
    )
}

pub(crate) fn check_reference(
    source_id: i64,
    text: &str,
    field_rule: &FieldRule,
    field: Field,
) -> Option<Issue> {
    (!text.contains(&field_rule.reference)).then(|| {
        Issue::error(
            source_id,
            issue_type("missing_census_reference", field),
            Category::Format,
            field,
            format!("{field} does not contain \"{}\"", field_rule.reference),
        )
        .with_expected(field_rule.reference.clone())
    })
}

pub(crate) fn check_double_space(source_id: i64, text: &str, field: Field) -> Option<Issue> {
    text.contains("  ").then(|| {
        Issue::warning(
            source_id,
            issue_type("double_space", field),
            Category::Format,
            field,
            format!("{field} contains a doubled space"),
        )
    })
}

pub(crate) fn check_familysearch_italics(
    source_id: i64,
    text: &str,
    field: Field,
) -> Option<Issue> {
    (!familysearch_is_italic(text)).then(|| {
        Issue::error(
            source_id,
            issue_type("familysearch_not_italic", field),
            Category::Format,
            field,
            format!("\"{FAMILYSEARCH}\" must be in italics"),
        )
        .with_expected(format!("{}{FAMILYSEARCH}{}", ITALIC_PLAIN.0, ITALIC_PLAIN.1))
    })
}

pub(crate) fn check_ending_period(
    source_id: i64,
    text: &str,
    field_rule: &FieldRule,
    field: Field,
) -> Option<Issue> {
    (field_rule.requires_ending_period && !ends_with_period(text)).then(|| {
        Issue::error(
            source_id,
            issue_type("missing_ending_period", field),
            Category::Format,
            field,
            format!("{field} must end with a period"),
        )
    })
}

/// Every "FamilySearch" must sit inside italics, plain or entity-escaped.
pub fn familysearch_is_italic(text: &str) -> bool {
    text.match_indices(FAMILYSEARCH).all(|(start, m)| {
        let before = &text[..start];
        let after = &text[start + m.len()..];
        [ITALIC_PLAIN, ITALIC_ESCAPED]
            .iter()
            .any(|(open, close)| before.ends_with(open) && after.starts_with(close))
    })
}

/// A final period, also accepted just before a closing plain or escaped quote.
pub fn ends_with_period(text: &str) -> bool {
    let trimmed = text.trim_end();
    trimmed.ends_with('.') || trimmed.ends_with(".\"") || trimmed.ends_with(".&quot;")
}

/// Quoted title with trailing punctuation removed.
pub fn normalize_title(title: &str) -> &str {
    title.trim().trim_end_matches([',', '.', ';']).trim_end()
}

pub(crate) fn quoted_title(text: &str) -> Option<String> {
    capture(&patterns::RE_QUOTED_TITLE, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn familysearch_italics_in_both_encodings() {
        assert!(familysearch_is_italic("imaged, <i>FamilySearch</i> (https://...)"));
        assert!(familysearch_is_italic("imaged, &lt;i&gt;FamilySearch&lt;/i&gt; (https://...)"));
        assert!(familysearch_is_italic("no mention at all"));
        assert!(!familysearch_is_italic("imaged, FamilySearch (https://...)"));
        assert!(!familysearch_is_italic("<i>FamilySearch</i> and FamilySearch"));
        assert!(!familysearch_is_italic("<i>FamilySearch&lt;/i&gt;"));
    }

    #[test]
    fn ending_period_accepts_period_before_closing_quote() {
        assert!(ends_with_period("Verne Adams."));
        assert!(ends_with_period("\"United States Census, 1940.\""));
        assert!(ends_with_period("&quot;United States Census, 1940.&quot;  "));
        assert!(!ends_with_period("Verne Adams"));
        assert!(!ends_with_period("\"United States Census, 1940\""));
    }

    #[test]
    fn titles_normalize_trailing_punctuation() {
        assert_eq!(normalize_title("United States Census, 1940,"), "United States Census, 1940");
        assert_eq!(normalize_title(" United States Census, 1940. "), "United States Census, 1940");
    }
}
