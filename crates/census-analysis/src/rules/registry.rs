//! Builds the immutable year-key → rule table.
//!
//! Every year is written out in full. No record is derived from another, so a
//! change to one year can never leak into a neighbour.

use std::collections::BTreeMap;

use census_core::types::{ScheduleVariant, YearKey};

use super::types::{BibliographyRule, EdFormat, FieldRule, YearRule};

const NO_SCHEDULE: &[&str] = &[];
const POPULATION_FOOTNOTE: &[&str] = &["population schedule"];
const POPULATION_SHORT: &[&str] = &["pop. sch.", "population schedule"];
const SLAVE_FOOTNOTE: &[&str] = &["slave schedule"];
const SLAVE_SHORT: &[&str] = &["slave sch.", "slave schedule"];

/// Build the full rule table. Pure and deterministic.
pub fn build_rules() -> BTreeMap<YearKey, YearRule> {
    let mut rules = BTreeMap::new();

    let mut insert = |rule: YearRule| {
        rules.insert(rule.key, rule);
    };

    insert(rule_1790());
    // Loop for compactness only; each decade gets its own record.
    for year in [1800, 1810, 1820, 1830, 1840] {
        insert(rule_1800_to_1840(year));
    }
    insert(rule_1850());
    insert(rule_1860());
    insert(rule_1870());
    insert(rule_1880());
    insert(rule_1890());
    insert(rule_1900());
    insert(rule_1910());
    insert(rule_1920());
    insert(rule_1930());
    insert(rule_1940());
    insert(rule_1950());
    insert(rule_1850_slave());
    insert(rule_1860_slave());

    rules
}

/// Read-only view over the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRegistry {
    rules: BTreeMap<YearKey, YearRule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: build_rules(),
        }
    }

    pub fn get(&self, key: &YearKey) -> Option<&YearRule> {
        self.rules.get(key)
    }

    /// Look up a year key given as text (`"1940"`, `"1850-slave"`).
    pub fn resolve(&self, requested: &str) -> Option<&YearRule> {
        requested
            .trim()
            .parse::<YearKey>()
            .ok()
            .and_then(|key| self.get(&key))
    }

    /// All supported keys, bare years first (ascending), then variant keys.
    pub fn supported_keys(&self) -> Vec<YearKey> {
        self.rules.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&YearKey, &YearRule)> {
        self.rules.iter()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 1790: heads of household only, page numbers, no schedule label.
fn rule_1790() -> YearRule {
    YearRule {
        key: YearKey::Year(1790),
        year: 1790,
        description: "1790 U.S. Federal Census (heads of household, page-numbered)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1790,".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1790 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1790 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1790".to_string(),
            alternate_titles: vec![],
        },
        quality: "PIO",
    }
}

/// 1800–1840: same shape as 1790, one independent record per decade.
fn rule_1800_to_1840(year: u16) -> YearRule {
    YearRule {
        key: YearKey::Year(year),
        year: year,
        description: format!("{year} U.S. Federal Census (heads of household, page-numbered)"),
        name: FieldRule {
            reference: format!("Fed Census: {year},"),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: format!("{year} U.S. census"),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: format!("{year} U.S. census"),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: format!("United States Census, {year}"),
            alternate_titles: vec![],
        },
        quality: "PIO",
    }
}

/// 1850: every free person named; page and line, no ED.
fn rule_1850() -> YearRule {
    YearRule {
        key: YearKey::Year(1850),
        year: 1850,
        description: "1850 U.S. Federal Census, population schedule (page and line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1850,".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1850 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1850 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1850".to_string(),
            alternate_titles: vec![],
        },
        quality: "PDO",
    }
}

/// 1860: page and family number, no line, no ED.
fn rule_1860() -> YearRule {
    YearRule {
        key: YearKey::Year(1860),
        year: 1860,
        description: "1860 U.S. Federal Census, population schedule (page and family)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1860,".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: true,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1860 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: true,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1860 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: true,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1860".to_string(),
            alternate_titles: vec![],
        },
        quality: "PDO",
    }
}

/// 1870: page and line, no ED.
fn rule_1870() -> YearRule {
    YearRule {
        key: YearKey::Year(1870),
        year: 1870,
        description: "1870 U.S. Federal Census, population schedule (page and line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1870,".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1870 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1870 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1870".to_string(),
            alternate_titles: vec![],
        },
        quality: "PDO",
    }
}

/// 1880: enumeration districts appear; stamped page and line, no sheet.
fn rule_1880() -> YearRule {
    YearRule {
        key: YearKey::Year(1880),
        year: 1880,
        description: "1880 U.S. Federal Census, population schedule (ED, stamped page, line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1880,".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1880 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1880 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1880".to_string(),
            alternate_titles: vec![],
        },
        quality: "PDO",
    }
}

/// 1890: ED, sheet, line (surviving fragments).
fn rule_1890() -> YearRule {
    YearRule {
        key: YearKey::Year(1890),
        year: 1890,
        description: "1890 U.S. Federal Census, population schedule (ED, sheet, line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1890,".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1890 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1890 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1890".to_string(),
            alternate_titles: vec!["United States Census, 1890 (Fragments)".to_string()],
        },
        quality: "PDO",
    }
}

/// 1900: ED, sheet, line.
fn rule_1900() -> YearRule {
    YearRule {
        key: YearKey::Year(1900),
        year: 1900,
        description: "1900 U.S. Federal Census, population schedule (ED, sheet, line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1900,".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1900 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1900 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1900".to_string(),
            alternate_titles: vec![],
        },
        quality: "PDO",
    }
}

/// 1910: ED, sheet, line.
fn rule_1910() -> YearRule {
    YearRule {
        key: YearKey::Year(1910),
        year: 1910,
        description: "1910 U.S. Federal Census, population schedule (ED, sheet, line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1910,".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1910 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1910 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1910".to_string(),
            alternate_titles: vec![],
        },
        quality: "PDO",
    }
}

/// 1920: ED, sheet, line.
fn rule_1920() -> YearRule {
    YearRule {
        key: YearKey::Year(1920),
        year: 1920,
        description: "1920 U.S. Federal Census, population schedule (ED, sheet, line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1920,".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1920 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1920 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Number),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1920".to_string(),
            alternate_titles: vec![],
        },
        quality: "PDO",
    }
}

/// 1930: ED numbers may be county-prefixed ranges such as 13-22.
fn rule_1930() -> YearRule {
    YearRule {
        key: YearKey::Year(1930),
        year: 1930,
        description: "1930 U.S. Federal Census, population schedule (ED, sheet, line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1930,".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Range),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1930 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Range),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1930 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::Range),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1930".to_string(),
            alternate_titles: vec![],
        },
        quality: "PDO",
    }
}

/// 1940: ED numbers may carry letter suffixes such as 23A-24B.
fn rule_1940() -> YearRule {
    YearRule {
        key: YearKey::Year(1940),
        year: 1940,
        description: "1940 U.S. Federal Census, population schedule (ED, sheet, line)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1940,".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::SuffixedRange),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1940 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::SuffixedRange),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1940 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::SuffixedRange),
            requires_sheet: true,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: true,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1940".to_string(),
            alternate_titles: vec!["United States 1940 Census".to_string()],
        },
        quality: "PDO",
    }
}

/// 1950: ED plus either sheet-with-line or stamp-without-line.
fn rule_1950() -> YearRule {
    YearRule {
        key: YearKey::Year(1950),
        year: 1950,
        description: "1950 U.S. Federal Census, population schedule (ED, sheet and line or stamp)".to_string(),
        name: FieldRule {
            reference: "Fed Census: 1950,".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::SuffixedRange),
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: true,
            requires_line: true,
            line_only_with_sheet: true,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1950 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::SuffixedRange),
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: true,
            requires_line: true,
            line_only_with_sheet: true,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1950 U.S. census".to_string(),
            requires_ed: true,
            ed_format: Some(EdFormat::SuffixedRange),
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: true,
            requires_line: true,
            line_only_with_sheet: true,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: POPULATION_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census, 1950".to_string(),
            alternate_titles: vec!["United States 1950 Census".to_string()],
        },
        quality: "PDO",
    }
}

/// 1850 slave schedule: owners named, page only, schedule label required.
fn rule_1850_slave() -> YearRule {
    YearRule {
        key: YearKey::Variant(1850, ScheduleVariant::Slave),
        year: 1850,
        description: "1850 U.S. Federal Census, slave schedule (page)".to_string(),
        name: FieldRule {
            reference: "Fed Census Slave Schedule: 1850,".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1850 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: SLAVE_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1850 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: SLAVE_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census (Slave Schedule), 1850".to_string(),
            alternate_titles: vec![],
        },
        quality: "PIO",
    }
}

/// 1860 slave schedule: owners named, page only, schedule label required.
fn rule_1860_slave() -> YearRule {
    YearRule {
        key: YearKey::Variant(1860, ScheduleVariant::Slave),
        year: 1860,
        description: "1860 U.S. Federal Census, slave schedule (page)".to_string(),
        name: FieldRule {
            reference: "Fed Census Slave Schedule: 1860,".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: false,
            schedule_variants: NO_SCHEDULE,
            requires_ending_period: false,
        },
        footnote: FieldRule {
            reference: "1860 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: SLAVE_FOOTNOTE,
            requires_ending_period: true,
        },
        short_footnote: FieldRule {
            reference: "1860 U.S. census".to_string(),
            requires_ed: false,
            ed_format: None,
            requires_sheet: false,
            requires_stamp: false,
            sheet_or_stamp: false,
            requires_line: false,
            line_only_with_sheet: false,
            requires_family: false,
            requires_schedule: true,
            schedule_variants: SLAVE_SHORT,
            requires_ending_period: true,
        },
        bibliography: BibliographyRule {
            title: "United States Census (Slave Schedule), 1860".to_string(),
            alternate_titles: vec![],
        },
        quality: "PIO",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_nineteen_keys() {
        let rules = build_rules();
        assert_eq!(rules.len(), 19);
        assert!(rules.contains_key(&YearKey::Year(1790)));
        assert!(rules.contains_key(&YearKey::Year(1950)));
        assert!(rules.contains_key(&YearKey::Variant(1850, ScheduleVariant::Slave)));
        assert!(rules.contains_key(&YearKey::Variant(1860, ScheduleVariant::Slave)));
    }

    #[test]
    fn build_is_idempotent() {
        assert_eq!(build_rules(), build_rules());
    }

    #[test]
    fn keys_match_their_records() {
        for (key, rule) in build_rules() {
            assert_eq!(key, rule.key);
            assert_eq!(key.year(), rule.year);
        }
    }

    #[test]
    fn every_required_ed_has_a_format() {
        for (key, rule) in build_rules() {
            for field in [&rule.name, &rule.footnote, &rule.short_footnote] {
                assert_eq!(field.requires_ed, field.ed_format.is_some(), "{key}");
                assert!(!field.reference.is_empty(), "{key}");
                if field.requires_schedule {
                    assert!(!field.schedule_variants.is_empty(), "{key}");
                }
            }
            assert!(!rule.bibliography.title.is_empty(), "{key}");
            assert!(!rule.quality.is_empty(), "{key}");
            assert!(!rule.description.is_empty(), "{key}");
        }
    }

    #[test]
    fn decades_1800_to_1840_are_independent_records() {
        let rules = build_rules();
        let r1800 = &rules[&YearKey::Year(1800)];
        let r1840 = &rules[&YearKey::Year(1840)];
        assert_eq!(r1800.name.reference, "Fed Census: 1800,");
        assert_eq!(r1840.name.reference, "Fed Census: 1840,");
        assert_eq!(r1840.bibliography.title, "United States Census, 1840");
    }

    #[test]
    fn era_specific_requirements() {
        let rules = build_rules();

        let r1860 = &rules[&YearKey::Year(1860)];
        assert!(r1860.name.requires_family);
        assert!(!r1860.name.requires_line);
        assert!(!r1860.name.requires_ed);

        let r1880 = &rules[&YearKey::Year(1880)];
        assert!(r1880.name.requires_ed);
        assert!(!r1880.name.requires_sheet);
        assert!(r1880.uses_stamped_page());

        let r1940 = &rules[&YearKey::Year(1940)];
        assert_eq!(r1940.name.ed_format, Some(EdFormat::SuffixedRange));
        assert!(r1940.name.requires_sheet && r1940.name.requires_line);

        let r1950 = &rules[&YearKey::Year(1950)];
        assert!(r1950.name.sheet_or_stamp);
        assert!(r1950.name.line_only_with_sheet);
        assert!(!r1950.name.requires_sheet && !r1950.name.requires_stamp);

        let slave = &rules[&YearKey::Variant(1850, ScheduleVariant::Slave)];
        assert!(slave.footnote.requires_schedule);
        assert_eq!(slave.footnote.schedule_variants, &["slave schedule"]);
        assert!(slave.short_footnote.schedule_variants.contains(&"slave sch."));
        assert!(!slave.name.requires_line && !slave.name.requires_ed);
    }

    #[test]
    fn supported_keys_sort_numeric_then_variant() {
        let keys = RuleRegistry::new().supported_keys();
        assert_eq!(keys.first(), Some(&YearKey::Year(1790)));
        assert_eq!(keys[16], YearKey::Year(1950));
        assert_eq!(keys[17], YearKey::Variant(1850, ScheduleVariant::Slave));
        assert_eq!(keys[18], YearKey::Variant(1860, ScheduleVariant::Slave));
    }

    #[test]
    fn resolve_parses_text_keys() {
        let registry = RuleRegistry::new();
        assert_eq!(registry.resolve(" 1880 ").map(|r| r.year), Some(1880));
        assert!(registry.resolve("1850-slave").is_some());
        assert!(registry.resolve("1945").is_none());
        assert!(registry.resolve("1870-slave").is_none());
        assert!(registry.resolve("").is_none());
    }
}
