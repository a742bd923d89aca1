//! Named regular expressions for census citation components.
//!
//! Keyword patterns (sheet, stamp, line, family) are case-insensitive because
//! the data is inconsistently cased. State names and quoted titles are
//! matched case-sensitively.

use regex::Regex;
use std::sync::LazyLock;

/// A named, lazily compiled pattern. A pattern that fails to compile is
/// `None` and behaves as a permanent non-match.
pub struct CitationPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! citation_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Identifying name ───────────────────────────────────────────────────────
citation_pattern!(RE_NAME_YEAR, r"^\s*Fed Census(?: Slave Schedule)?:\s*(\d{4})");
citation_pattern!(
    RE_NAME_PLACE,
    r"^\s*Fed Census[^:]*:\s*\d{4},\s*([^,\[]+?)\s*,\s*([^,\[]+?)\s*\["
);
citation_pattern!(RE_NAME_ED_BRACKETED, r"\[ED\s+([0-9]+[A-Za-z]?(?:-[0-9]+[A-Za-z]?)?)\b");
citation_pattern!(
    RE_NAME_ED_CITING,
    r"(?i)citing enumeration district \(ED\)\s+([0-9]+[A-Za-z]?(?:-[0-9]+[A-Za-z]?)?)\b"
);
citation_pattern!(RE_NAME_PERSON, r"\]\s*(.+?)\s*$");
citation_pattern!(
    RE_LEADING_NUMBERING,
    r"(?i)^(?:(?:line|family|household ID|dwelling)\s+\d+[,;]?\s*)+"
);

// ── Shared keywords ────────────────────────────────────────────────────────
citation_pattern!(RE_SHEET, r"(?i)\bsheet\s+(\d+[A-Za-z]?)\b");
citation_pattern!(RE_STAMP, r"(?i)\bstamp\s+(\d+)\b|\bpage\s+(\d+)\s+\(stamped\)");
citation_pattern!(RE_PAGE, r"(?i)\bpage\s+(\d+)\b");
citation_pattern!(RE_PAGE_STAMPED, r"(?i)\bpage\s+(\d+)\s+\(stamped\)");
citation_pattern!(RE_LINE, r"(?i)\bline\s+(\d+)\b");
citation_pattern!(RE_FAMILY, r"(?i)\bfamily\s+(\d+)\b");
citation_pattern!(RE_HOUSEHOLD, r"(?i)\bhousehold\s+ID\s+(\d+)\b");
citation_pattern!(RE_DWELLING, r"(?i)\bdwelling\s+(\d+)\b");
citation_pattern!(
    RE_SCHEDULE,
    r"(?i)\b(population schedule|slave schedule|pop\. sch\.|slave sch\.)"
);
citation_pattern!(
    RE_QUOTED_TITLE,
    r#"(?:"|&quot;|“)([^"“”&]+?)(?:"|&quot;|”)"#
);

// ── Footnote ───────────────────────────────────────────────────────────────
citation_pattern!(RE_FOOTNOTE_YEAR, r"^\s*(\d{4})\s+U\.S\.\s+census");
citation_pattern!(
    RE_FOOTNOTE_PLACE,
    r"([A-Z][A-Za-z .'-]*?)\s+(County|Parish|\(Independent City\)),\s+([A-Z][A-Za-z .]*?)\s*(?:,|;|$)"
);
citation_pattern!(
    RE_FOOTNOTE_ED,
    r"(?i)enumeration district \(ED\)\s+([0-9]+[A-Za-z]?(?:-[0-9]+[A-Za-z]?)?)\b"
);
citation_pattern!(RE_FOOTNOTE_ED_NUMBERED, r"(?i)enumeration district \(ED\)\s*\d");
citation_pattern!(RE_FOOTNOTE_PERSON, r",\s*([^,;]+?);\s*imaged");

// ── Short footnote ─────────────────────────────────────────────────────────
citation_pattern!(
    RE_SHORT_PLACE,
    r"([A-Z][A-Za-z .'-]*?)\s+(Co\.|County|Par\.|Parish|\(Ind\. City\)|\(Independent City\)),\s+([A-Z][A-Za-z. ]*?)\s*(?:,|;|$)"
);
citation_pattern!(RE_SHORT_ED, r"E\.D\.\s*([0-9]+[A-Za-z]?(?:-[0-9]+[A-Za-z]?)?)\b");
citation_pattern!(RE_SHORT_ED_NUMBERED, r"E\.D\.\s*\d");
citation_pattern!(RE_SHORT_PAGE, r"(?i)(?:\bpage\s+|\bp\.\s*)(\d+)\b");
citation_pattern!(
    RE_SHORT_PAGE_STAMPED,
    r"(?i)(?:\bpage\s+|\bp\.\s*)(\d+)\s+\(stamped\)"
);
citation_pattern!(RE_SHORT_LINE, r"(?i)(?:\bline\s+|\bln\.\s*)(\d+)\b");
citation_pattern!(RE_SHORT_FAMILY, r"(?i)(?:\bfamily\s+|\bfam\.\s*)(\d+)\b");
citation_pattern!(RE_SHORT_PERSON, r#",\s*([^,]+?)\.(?:"|&quot;)?\s*$"#);

// ── Bibliography ───────────────────────────────────────────────────────────
citation_pattern!(RE_BIB_STATE, r"^\s*U\.S\.,?\s+([^.]+?)\.");
citation_pattern!(
    RE_BIB_COUNTY,
    r"^\s*U\.S\.,?\s+[^.]+?\.\s+([^.]+?)\s+(?:County|Parish)\."
);
citation_pattern!(RE_BIB_YEAR, r"(\d{4})\s+U\.S\.?\s+[Cc]ensus");

/// Every named pattern, for compile checks.
pub fn all_patterns() -> Vec<CitationPattern> {
    vec![
        CitationPattern { name: "name_year", regex: &RE_NAME_YEAR },
        CitationPattern { name: "name_place", regex: &RE_NAME_PLACE },
        CitationPattern { name: "name_ed_bracketed", regex: &RE_NAME_ED_BRACKETED },
        CitationPattern { name: "name_ed_citing", regex: &RE_NAME_ED_CITING },
        CitationPattern { name: "name_person", regex: &RE_NAME_PERSON },
        CitationPattern { name: "leading_numbering", regex: &RE_LEADING_NUMBERING },
        CitationPattern { name: "sheet", regex: &RE_SHEET },
        CitationPattern { name: "stamp", regex: &RE_STAMP },
        CitationPattern { name: "page", regex: &RE_PAGE },
        CitationPattern { name: "page_stamped", regex: &RE_PAGE_STAMPED },
        CitationPattern { name: "line", regex: &RE_LINE },
        CitationPattern { name: "family", regex: &RE_FAMILY },
        CitationPattern { name: "household", regex: &RE_HOUSEHOLD },
        CitationPattern { name: "dwelling", regex: &RE_DWELLING },
        CitationPattern { name: "schedule", regex: &RE_SCHEDULE },
        CitationPattern { name: "quoted_title", regex: &RE_QUOTED_TITLE },
        CitationPattern { name: "footnote_year", regex: &RE_FOOTNOTE_YEAR },
        CitationPattern { name: "footnote_place", regex: &RE_FOOTNOTE_PLACE },
        CitationPattern { name: "footnote_ed", regex: &RE_FOOTNOTE_ED },
        CitationPattern { name: "footnote_ed_numbered", regex: &RE_FOOTNOTE_ED_NUMBERED },
        CitationPattern { name: "footnote_person", regex: &RE_FOOTNOTE_PERSON },
        CitationPattern { name: "short_place", regex: &RE_SHORT_PLACE },
        CitationPattern { name: "short_ed", regex: &RE_SHORT_ED },
        CitationPattern { name: "short_ed_numbered", regex: &RE_SHORT_ED_NUMBERED },
        CitationPattern { name: "short_page", regex: &RE_SHORT_PAGE },
        CitationPattern { name: "short_page_stamped", regex: &RE_SHORT_PAGE_STAMPED },
        CitationPattern { name: "short_line", regex: &RE_SHORT_LINE },
        CitationPattern { name: "short_family", regex: &RE_SHORT_FAMILY },
        CitationPattern { name: "short_person", regex: &RE_SHORT_PERSON },
        CitationPattern { name: "bib_state", regex: &RE_BIB_STATE },
        CitationPattern { name: "bib_county", regex: &RE_BIB_COUNTY },
        CitationPattern { name: "bib_year", regex: &RE_BIB_YEAR },
    ]
}

/// First participating capture group of the first match, trimmed.
pub fn capture(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let re = pattern.as_ref()?;
    let caps = re.captures(text)?;
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().trim().to_string())
        .find(|s| !s.is_empty())
}

/// True when the pattern matches anywhere in `text`.
pub fn is_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for pat in all_patterns() {
            assert!(pat.regex.is_some(), "pattern '{}' failed to compile", pat.name);
        }
    }

    #[test]
    fn capture_uses_whichever_alternative_matched() {
        assert_eq!(capture(&RE_STAMP, "stamp 12, Adams").as_deref(), Some("12"));
        assert_eq!(capture(&RE_STAMP, "page 5 (stamped), Adams").as_deref(), Some("5"));
        assert_eq!(capture(&RE_STAMP, "page 5, Adams"), None);
    }

    #[test]
    fn ed_tokens_stop_at_punctuation() {
        assert_eq!(
            capture(&RE_NAME_ED_BRACKETED, "[ED 23A-24B, sheet 5A]").as_deref(),
            Some("23A-24B")
        );
        assert_eq!(
            capture(&RE_FOOTNOTE_ED, "enumeration district (ED) 76-95, sheet 5A").as_deref(),
            Some("76-95")
        );
        assert_eq!(capture(&RE_SHORT_ED, "E.D. 95, sheet 3").as_deref(), Some("95"));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(capture(&RE_SHEET, "Sheet 5A").as_deref(), Some("5A"));
        assert_eq!(capture(&RE_LINE, "LINE 12").as_deref(), Some("12"));
        assert_eq!(capture(&RE_HOUSEHOLD, "Household Id 77").as_deref(), Some("77"));
    }
}
