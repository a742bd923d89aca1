//! Core types for the citation rule registry.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use census_core::types::YearKey;

/// Accepted shape of an enumeration-district number. Widens over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdFormat {
    /// `95`
    Number,
    /// `95` or `13-22`
    Range,
    /// `95`, `13-22`, `23A`, or `23A-24B`
    SuffixedRange,
}

static ED_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+$").ok());
static ED_RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d+(?:-\d+)?$").ok());
static ED_SUFFIXED_RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d+[A-Za-z]?(?:-\d+[A-Za-z]?)?$").ok());

impl EdFormat {
    /// Whole-token matcher for an extracted ED value.
    pub fn regex(&self) -> &'static LazyLock<Option<Regex>> {
        match self {
            Self::Number => &ED_NUMBER,
            Self::Range => &ED_RANGE,
            Self::SuffixedRange => &ED_SUFFIXED_RANGE,
        }
    }

    /// True when `token` is a well-formed ED number for this format.
    pub fn accepts(&self, token: &str) -> bool {
        self.regex()
            .as_ref()
            .is_some_and(|re| re.is_match(token.trim()))
    }

    pub fn example(&self) -> &'static str {
        match self {
            Self::Number => "95",
            Self::Range => "13-22",
            Self::SuffixedRange => "23A-24B",
        }
    }
}

/// Requirements for one citation representation (identifying name,
/// footnote, or short footnote).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    /// Literal text the field must start with (identifying name) or contain
    /// (footnotes).
    pub reference: String,
    pub requires_ed: bool,
    pub ed_format: Option<EdFormat>,
    pub requires_sheet: bool,
    pub requires_stamp: bool,
    /// Either a sheet or a stamp satisfies the page-number requirement.
    pub sheet_or_stamp: bool,
    pub requires_line: bool,
    /// The line requirement applies only when the sheet form is used.
    pub line_only_with_sheet: bool,
    /// `family N` or `household ID N` must appear.
    pub requires_family: bool,
    pub requires_schedule: bool,
    /// Accepted schedule labels; at least one must appear (case-insensitive).
    pub schedule_variants: &'static [&'static str],
    pub requires_ending_period: bool,
}

/// Requirements for the bibliography entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibliographyRule {
    /// Expected quoted collection title, without trailing punctuation.
    pub title: String,
    /// Other titles accepted in the bibliography.
    pub alternate_titles: Vec<String>,
}

/// The complete rule record for one year key. Every field is set
/// explicitly when the registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRule {
    pub key: YearKey,
    pub year: u16,
    pub description: String,
    pub name: FieldRule,
    pub footnote: FieldRule,
    pub short_footnote: FieldRule,
    pub bibliography: BibliographyRule,
    /// Citation-quality label every citation of this year should carry.
    pub quality: &'static str,
}

impl YearRule {
    /// Years up to 1880 number pages as "page N"; sheet and stamp flags are
    /// not consulted for them.
    pub fn uses_page_numbers(&self) -> bool {
        self.year <= 1880
    }

    /// 1880 footnotes cite the stamped page: "page N (stamped)".
    pub fn uses_stamped_page(&self) -> bool {
        self.year == 1880
    }

    /// The bibliography title plus every alternate.
    pub fn accepted_titles(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.bibliography.title.as_str())
            .chain(self.bibliography.alternate_titles.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ed_formats_widen_over_time() {
        assert!(EdFormat::Number.accepts("95"));
        assert!(!EdFormat::Number.accepts("13-22"));

        assert!(EdFormat::Range.accepts("13-22"));
        assert!(!EdFormat::Range.accepts("23A-24B"));

        assert!(EdFormat::SuffixedRange.accepts("23A-24B"));
        assert!(EdFormat::SuffixedRange.accepts("95a"));
        assert!(EdFormat::SuffixedRange.accepts("13-22"));
        assert!(!EdFormat::SuffixedRange.accepts("ED"));
    }

    #[test]
    fn every_format_accepts_its_example() {
        for format in [EdFormat::Number, EdFormat::Range, EdFormat::SuffixedRange] {
            assert!(format.accepts(format.example()), "{format:?}");
        }
    }
}
