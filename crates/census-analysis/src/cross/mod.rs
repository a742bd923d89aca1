//! Cross-field consistency between the four citation texts of one source.

use std::sync::LazyLock;

use regex::Regex;

use census_core::traits::JurisdictionLookup;
use census_core::types::YearKey;

use crate::extract::patterns::{self, is_match};
use crate::extract::{
    extract_from_bibliography, extract_from_footnote, extract_from_name,
    extract_from_short_footnote, ExtractedComponents,
};
use crate::rules::YearRule;
use crate::validate::states::{normalize_state, state_abbreviation};
use crate::validate::{Category, Field, Issue};

const INDEPENDENT_CITY: &str = "(Independent City)";

/// The four texts of one source.
#[derive(Debug, Clone, Copy)]
pub struct CitationTexts<'a> {
    pub name: &'a str,
    pub footnote: &'a str,
    pub short_footnote: &'a str,
    pub bibliography: &'a str,
}

/// Compare the components of all four texts and report inconsistencies.
pub fn check_cross_fields(
    source_id: i64,
    texts: CitationTexts<'_>,
    rule: &YearRule,
    jurisdictions: &dyn JurisdictionLookup,
) -> Vec<Issue> {
    let name = extract_from_name(texts.name);
    let footnote = extract_from_footnote(texts.footnote);
    let short = extract_from_short_footnote(texts.short_footnote);
    let bibliography = extract_from_bibliography(texts.bibliography);

    let mut issues = Vec::new();

    if rule.key == YearKey::Year(1850) {
        issues.extend(duplicate_locality(source_id, &footnote, Field::Footnote));
        issues.extend(duplicate_locality(source_id, &short, Field::ShortFootnote));
    }

    issues.extend(ed_mismatch(source_id, &name, &footnote));

    if rule.name.requires_ed {
        if !texts.footnote.trim().is_empty()
            && !is_match(&patterns::RE_FOOTNOTE_ED_NUMBERED, texts.footnote)
        {
            issues.push(Issue::error(
                source_id,
                "footnote_ed_unnumbered",
                Category::Format,
                Field::Footnote,
                "footnote must cite a numbered \"enumeration district (ED) N\"",
            ));
        }
        if !texts.short_footnote.trim().is_empty()
            && !is_match(&patterns::RE_SHORT_ED_NUMBERED, texts.short_footnote)
        {
            issues.push(Issue::error(
                source_id,
                "short_footnote_ed_unnumbered",
                Category::Format,
                Field::ShortFootnote,
                "short footnote must cite a numbered \"E.D. N\"",
            ));
        }
    }

    issues.extend(sheet_mismatch(source_id, &name, &footnote, Field::Footnote));
    issues.extend(sheet_mismatch(source_id, &name, &short, Field::ShortFootnote));
    issues.extend(state_mismatch(source_id, &name, &footnote, Field::Footnote));
    issues.extend(county_mismatch(source_id, &name, &footnote));
    issues.extend(state_abbrev_mismatch(source_id, &name, &short));
    issues.extend(state_mismatch(source_id, &name, &bibliography, Field::Bibliography));
    issues.extend(independent_city(source_id, texts, &name, jurisdictions));

    if rule.name.requires_family {
        issues.extend(family_terms(source_id, texts));
    }

    issues
}

/// Lowercase and drop a trailing "county" word.
fn normalize_place(place: &str) -> String {
    let lower = place.trim().to_lowercase();
    match lower.strip_suffix("county") {
        Some(rest) => rest.trim_end().to_string(),
        None => lower,
    }
}

/// Strip a trailing " City" or " County" from a county token.
fn base_place(place: &str) -> &str {
    let trimmed = place.trim();
    trimmed
        .strip_suffix(" City")
        .or_else(|| trimmed.strip_suffix(" County"))
        .unwrap_or(trimmed)
}

/// Normalize an ED for comparison: lowercase, drop letter suffixes and
/// leading zeros on each side of a range.
pub fn normalize_ed(ed: &str) -> String {
    ed.trim()
        .to_lowercase()
        .split('-')
        .map(|part| {
            let digits = part.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            let stripped = digits.trim_start_matches('0');
            if stripped.is_empty() && !digits.is_empty() {
                "0".to_string()
            } else {
                stripped.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn duplicate_locality(source_id: i64, components: &ExtractedComponents, field: Field) -> Option<Issue> {
    let county = components.county.as_deref()?;
    let locality = components.locality.as_deref()?;
    (normalize_place(county) == normalize_place(locality)).then(|| {
        Issue::warning(
            source_id,
            format!("duplicate_locality{}", field.issue_suffix()),
            Category::Duplicate,
            field,
            format!("locality '{locality}' repeats the county name"),
        )
        .with_current(locality)
    })
}

fn ed_mismatch(source_id: i64, name: &ExtractedComponents, footnote: &ExtractedComponents) -> Option<Issue> {
    let name_ed = name.enumeration_district.as_deref()?;
    let footnote_ed = footnote.enumeration_district.as_deref()?;
    (name_ed != footnote_ed && normalize_ed(name_ed) != normalize_ed(footnote_ed)).then(|| {
        Issue::error(
            source_id,
            "ed_mismatch",
            Category::Consistency,
            Field::Footnote,
            format!("footnote ED '{footnote_ed}' differs from name ED '{name_ed}'"),
        )
        .with_current(footnote_ed)
        .with_expected(name_ed)
    })
}

fn sheet_mismatch(
    source_id: i64,
    name: &ExtractedComponents,
    other: &ExtractedComponents,
    field: Field,
) -> Option<Issue> {
    let expected = name.sheet.as_deref()?;
    let found = other.sheet.as_deref()?;
    (!expected.eq_ignore_ascii_case(found)).then(|| {
        Issue::error(
            source_id,
            format!("sheet_mismatch{}", field.issue_suffix()),
            Category::Consistency,
            field,
            format!("{field} sheet '{found}' differs from name sheet '{expected}'"),
        )
        .with_current(found)
        .with_expected(expected)
    })
}

fn state_mismatch(
    source_id: i64,
    name: &ExtractedComponents,
    other: &ExtractedComponents,
    field: Field,
) -> Option<Issue> {
    let expected = name.state.as_deref()?;
    let found = other.state.as_deref()?;
    (normalize_state(expected) != normalize_state(found)).then(|| {
        Issue::error(
            source_id,
            format!("state_mismatch{}", field.issue_suffix()),
            Category::Consistency,
            field,
            format!("{field} state '{found}' differs from name state '{expected}'"),
        )
        .with_current(found)
        .with_expected(expected)
    })
}

fn county_mismatch(source_id: i64, name: &ExtractedComponents, footnote: &ExtractedComponents) -> Option<Issue> {
    let expected = name.county.as_deref()?;
    let found = footnote.county.as_deref()?;
    (!base_place(expected).eq_ignore_ascii_case(base_place(found))).then(|| {
        Issue::error(
            source_id,
            "county_mismatch_footnote",
            Category::Consistency,
            Field::Footnote,
            format!("footnote county '{found}' differs from name county '{expected}'"),
        )
        .with_current(found)
        .with_expected(expected)
    })
}

fn state_abbrev_mismatch(source_id: i64, name: &ExtractedComponents, short: &ExtractedComponents) -> Option<Issue> {
    let state = name.state.as_deref()?;
    let found = short.state.as_deref()?;
    let expected = state_abbreviation(state)?;
    (found != expected).then(|| {
        Issue::error(
            source_id,
            "state_abbrev_mismatch_short_footnote",
            Category::Consistency,
            Field::ShortFootnote,
            format!("short footnote state '{found}' should be abbreviated '{expected}'"),
        )
        .with_current(found)
        .with_expected(expected)
    })
}

fn independent_city(
    source_id: i64,
    texts: CitationTexts<'_>,
    name: &ExtractedComponents,
    jurisdictions: &dyn JurisdictionLookup,
) -> Option<Issue> {
    let state = name.state.as_deref()?;
    let county = name.county.as_deref()?;
    let city = jurisdictions.independent_city(normalize_state(state), base_place(county))?;

    let means_county = city
        .county_pattern
        .as_deref()
        .is_some_and(|p| texts.name.contains(p));
    if means_county {
        return None;
    }
    let means_city = match city.city_pattern.as_deref() {
        Some(p) => texts.name.contains(p),
        None => true,
    };
    if !means_city || texts.footnote.trim().is_empty() || texts.footnote.contains(INDEPENDENT_CITY) {
        return None;
    }
    Some(
        Issue::warning(
            source_id,
            "independent_city_format",
            Category::Jurisdiction,
            Field::Footnote,
            format!("{} is an independent city; cite it as \"{} {INDEPENDENT_CITY}\"", city.name, city.name),
        )
        .with_expected(format!("{} {INDEPENDENT_CITY}", city.name)),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FamilyTerm {
    Family,
    Household,
}

impl FamilyTerm {
    fn label(&self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Household => "household ID",
        }
    }
}

fn term_in(text: &str, family: &LazyLock<Option<Regex>>) -> Option<FamilyTerm> {
    if is_match(family, text) {
        Some(FamilyTerm::Family)
    } else if is_match(&patterns::RE_HOUSEHOLD, text) {
        Some(FamilyTerm::Household)
    } else {
        None
    }
}

/// The name's term is authoritative; footnotes using the other term are flagged.
fn family_terms(source_id: i64, texts: CitationTexts<'_>) -> Vec<Issue> {
    let Some(expected) = term_in(texts.name, &patterns::RE_FAMILY) else {
        return Vec::new();
    };
    [
        (Field::Footnote, texts.footnote, &patterns::RE_FAMILY),
        (Field::ShortFootnote, texts.short_footnote, &patterns::RE_SHORT_FAMILY),
    ]
    .into_iter()
    .filter_map(|(field, text, family)| {
        let found = term_in(text, family)?;
        (found != expected).then(|| {
            Issue::warning(
                source_id,
                format!("family_term_mismatch{}", field.issue_suffix()),
                Category::Consistency,
                field,
                format!("{field} uses \"{}\" but the name uses \"{}\"", found.label(), expected.label()),
            )
            .with_current(found.label())
            .with_expected(expected.label())
        })
    })
    .collect()
}
