//! Structured components pulled out of one citation text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::patterns::*;

/// Flat record of what an extractor found. Unset fields were not present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedComponents {
    pub year: Option<u16>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub locality: Option<String>,
    pub enumeration_district: Option<String>,
    pub sheet: Option<String>,
    pub stamp: Option<String>,
    pub page: Option<String>,
    pub line: Option<String>,
    pub family: Option<String>,
    pub household_id: Option<String>,
    pub dwelling: Option<String>,
    pub person_name: Option<String>,
    pub quoted_title: Option<String>,
    pub schedule_type: Option<String>,
    pub raw: String,
}

/// Ways an identifying name can state its enumeration district, in the
/// order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEdForm {
    /// `[ED 95, sheet 3A]`
    Bracketed,
    /// `citing enumeration district (ED) 95`
    Citing,
}

impl NameEdForm {
    pub const ORDER: [NameEdForm; 2] = [NameEdForm::Bracketed, NameEdForm::Citing];

    fn pattern(&self) -> &'static LazyLock<Option<Regex>> {
        match self {
            Self::Bracketed => &RE_NAME_ED_BRACKETED,
            Self::Citing => &RE_NAME_ED_CITING,
        }
    }
}

/// First ED form that matches wins; later forms are not tried.
pub fn name_enumeration_district(text: &str) -> Option<(NameEdForm, String)> {
    NameEdForm::ORDER
        .iter()
        .find_map(|form| capture(form.pattern(), text).map(|ed| (*form, ed)))
}

fn parse_year(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<u16> {
    capture(pattern, text).and_then(|y| y.parse().ok())
}

fn schedule_type(text: &str) -> Option<String> {
    capture(&RE_SCHEDULE, text).map(|s| s.to_lowercase())
}

fn quoted_title(text: &str) -> Option<String> {
    capture(&RE_QUOTED_TITLE, text)
}

/// (county, state, locality) from a "X County, State, Locality" run.
fn place(pattern: &LazyLock<Option<Regex>>, text: &str) -> (Option<String>, Option<String>, Option<String>) {
    let Some(re) = pattern.as_ref() else {
        return (None, None, None);
    };
    let Some(caps) = re.captures(text) else {
        return (None, None, None);
    };
    let county = caps.get(1).map(|m| m.as_str().trim().to_string());
    let state = caps
        .get(3)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());
    let locality = caps.get(0).and_then(|whole| {
        text[whole.end()..]
            .split([',', ';'])
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    });
    (county, state, locality)
}

/// Components of an identifying name such as
/// `Fed Census: 1940, Ohio, Stark [ED 76-95, sheet 5A] line 12 Adams, Verne`.
pub fn extract_from_name(text: &str) -> ExtractedComponents {
    let (state, county) = match RE_NAME_PLACE.as_ref().and_then(|re| re.captures(text)) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().trim().to_string()),
            caps.get(2).map(|m| m.as_str().trim().to_string()),
        ),
        None => (None, None),
    };

    let person_name = capture(&RE_NAME_PERSON, text).and_then(|rest| {
        let stripped = match RE_LEADING_NUMBERING.as_ref() {
            Some(re) => re.replace(&rest, "").trim().to_string(),
            None => rest,
        };
        (!stripped.is_empty()).then_some(stripped)
    });

    ExtractedComponents {
        year: parse_year(&RE_NAME_YEAR, text),
        state,
        county,
        locality: None,
        enumeration_district: name_enumeration_district(text).map(|(_, ed)| ed),
        sheet: capture(&RE_SHEET, text),
        stamp: capture(&RE_STAMP, text),
        page: capture(&RE_PAGE, text),
        line: capture(&RE_LINE, text),
        family: capture(&RE_FAMILY, text),
        household_id: capture(&RE_HOUSEHOLD, text),
        dwelling: capture(&RE_DWELLING, text),
        person_name,
        quoted_title: None,
        schedule_type: schedule_type(text),
        raw: text.to_string(),
    }
}

/// Components of a full footnote.
pub fn extract_from_footnote(text: &str) -> ExtractedComponents {
    let (county, state, locality) = place(&RE_FOOTNOTE_PLACE, text);
    ExtractedComponents {
        year: parse_year(&RE_FOOTNOTE_YEAR, text),
        state,
        county,
        locality,
        enumeration_district: capture(&RE_FOOTNOTE_ED, text),
        sheet: capture(&RE_SHEET, text),
        stamp: capture(&RE_STAMP, text),
        page: capture(&RE_PAGE, text),
        line: capture(&RE_LINE, text),
        family: capture(&RE_FAMILY, text),
        household_id: capture(&RE_HOUSEHOLD, text),
        dwelling: capture(&RE_DWELLING, text),
        person_name: capture(&RE_FOOTNOTE_PERSON, text),
        quoted_title: quoted_title(text),
        schedule_type: schedule_type(text),
        raw: text.to_string(),
    }
}

/// Components of a short footnote (abbreviated forms).
pub fn extract_from_short_footnote(text: &str) -> ExtractedComponents {
    let (county, state, locality) = place(&RE_SHORT_PLACE, text);
    ExtractedComponents {
        year: parse_year(&RE_FOOTNOTE_YEAR, text),
        state,
        county,
        locality,
        enumeration_district: capture(&RE_SHORT_ED, text),
        sheet: capture(&RE_SHEET, text),
        stamp: capture(&RE_STAMP, text),
        page: capture(&RE_SHORT_PAGE, text),
        line: capture(&RE_SHORT_LINE, text),
        family: capture(&RE_SHORT_FAMILY, text),
        household_id: capture(&RE_HOUSEHOLD, text),
        dwelling: capture(&RE_DWELLING, text),
        person_name: capture(&RE_SHORT_PERSON, text),
        quoted_title: quoted_title(text),
        schedule_type: schedule_type(text),
        raw: text.to_string(),
    }
}

/// Components of a bibliography entry such as
/// `U.S. Ohio. Stark County. 1940 U.S Census. Population Schedule. …`.
pub fn extract_from_bibliography(text: &str) -> ExtractedComponents {
    ExtractedComponents {
        year: parse_year(&RE_BIB_YEAR, text),
        state: capture(&RE_BIB_STATE, text),
        county: capture(&RE_BIB_COUNTY, text),
        quoted_title: quoted_title(text),
        schedule_type: schedule_type(text),
        raw: text.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_1940: &str = "Fed Census: 1940, Ohio, Stark [ED 76-95, sheet 5A] line 12 Adams, Verne";
    const FOOTNOTE_1940: &str = "1940 U.S. census, population schedule, Stark County, Ohio, Canton, \
        enumeration district (ED) 76-95, sheet 5A, line 12, Verne Adams; imaged, \
        \"United States Census, 1940,\" <i>FamilySearch</i> (https://www.familysearch.org : accessed 2024).";
    const SHORT_1940: &str =
        "1940 U.S. census, pop. sch., Stark Co., Ohio, E.D. 76-95, sheet 5A, line 12, Verne Adams.";
    const BIB_1940: &str = "U.S. Ohio. Stark County. 1940 U.S Census. Population Schedule. Imaged. \
        \"United States Census, 1940.\" <i>FamilySearch</i> https://www.familysearch.org : 2024.";

    #[test]
    fn name_components() {
        let c = extract_from_name(NAME_1940);
        assert_eq!(c.year, Some(1940));
        assert_eq!(c.state.as_deref(), Some("Ohio"));
        assert_eq!(c.county.as_deref(), Some("Stark"));
        assert_eq!(c.enumeration_district.as_deref(), Some("76-95"));
        assert_eq!(c.sheet.as_deref(), Some("5A"));
        assert_eq!(c.line.as_deref(), Some("12"));
        assert_eq!(c.person_name.as_deref(), Some("Adams, Verne"));
        assert_eq!(c.raw, NAME_1940);
    }

    #[test]
    fn bracketed_ed_wins_over_citing_form() {
        let text = "Fed Census: 1940, Ohio, Stark [ED 95, sheet 1A] citing enumeration district (ED) 12";
        let (form, ed) = name_enumeration_district(text).unwrap();
        assert_eq!(form, NameEdForm::Bracketed);
        assert_eq!(ed, "95");

        let citing = "Fed Census: 1940, Ohio, Stark citing enumeration district (ED) 12, sheet 1A";
        let (form, ed) = name_enumeration_district(citing).unwrap();
        assert_eq!(form, NameEdForm::Citing);
        assert_eq!(ed, "12");
    }

    #[test]
    fn footnote_components() {
        let c = extract_from_footnote(FOOTNOTE_1940);
        assert_eq!(c.year, Some(1940));
        assert_eq!(c.county.as_deref(), Some("Stark"));
        assert_eq!(c.state.as_deref(), Some("Ohio"));
        assert_eq!(c.locality.as_deref(), Some("Canton"));
        assert_eq!(c.enumeration_district.as_deref(), Some("76-95"));
        assert_eq!(c.schedule_type.as_deref(), Some("population schedule"));
        assert_eq!(c.quoted_title.as_deref(), Some("United States Census, 1940,"));
        assert_eq!(c.person_name.as_deref(), Some("Verne Adams"));
    }

    #[test]
    fn short_footnote_components() {
        let c = extract_from_short_footnote(SHORT_1940);
        assert_eq!(c.county.as_deref(), Some("Stark"));
        assert_eq!(c.state.as_deref(), Some("Ohio"));
        assert_eq!(c.enumeration_district.as_deref(), Some("76-95"));
        assert_eq!(c.schedule_type.as_deref(), Some("pop. sch."));
        assert_eq!(c.line.as_deref(), Some("12"));
        assert_eq!(c.person_name.as_deref(), Some("Verne Adams"));
    }

    #[test]
    fn bibliography_components() {
        let c = extract_from_bibliography(BIB_1940);
        assert_eq!(c.state.as_deref(), Some("Ohio"));
        assert_eq!(c.county.as_deref(), Some("Stark"));
        assert_eq!(c.year, Some(1940));
        assert_eq!(c.quoted_title.as_deref(), Some("United States Census, 1940."));
    }

    #[test]
    fn independent_city_footnote_place() {
        let c = extract_from_footnote(
            "1940 U.S. census, population schedule, Alexandria (Independent City), Virginia, \
             enumeration district (ED) 100-1, sheet 2B, line 4, John Doe.",
        );
        assert_eq!(c.county.as_deref(), Some("Alexandria"));
        assert_eq!(c.state.as_deref(), Some("Virginia"));
    }

    #[test]
    fn malformed_input_leaves_fields_unset() {
        let c = extract_from_name("completely unrelated text");
        assert_eq!(
            c,
            ExtractedComponents {
                raw: "completely unrelated text".to_string(),
                ..Default::default()
            }
        );
        assert_eq!(extract_from_footnote("").raw, "");
    }
}
