//! Finding types shared by every validator.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a finding. Ordered by `rank()`: errors first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Lower rank sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }

    pub fn all() -> [Severity; 3] {
        [Self::Error, Self::Warning, Self::Info]
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// What kind of problem a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Title,
    Format,
    Missing,
    Consistency,
    Duplicate,
    Media,
    Quality,
    Typo,
    Jurisdiction,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Title => "title",
            Self::Format => "format",
            Self::Missing => "missing",
            Self::Consistency => "consistency",
            Self::Duplicate => "duplicate",
            Self::Media => "media",
            Self::Quality => "quality",
            Self::Typo => "typo",
            Self::Jurisdiction => "jurisdiction",
        };
        f.write_str(s)
    }
}

/// Which citation text a finding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Footnote,
    ShortFootnote,
    Bibliography,
    Media,
    Quality,
}

impl Field {
    /// Suffix appended to field-specific issue types (`missing_line_footnote`).
    pub fn issue_suffix(&self) -> &'static str {
        match self {
            Self::Name | Self::Media | Self::Quality => "",
            Self::Footnote => "_footnote",
            Self::ShortFootnote => "_short_footnote",
            Self::Bibliography => "_bibliography",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Footnote => "footnote",
            Self::ShortFootnote => "short_footnote",
            Self::Bibliography => "bibliography",
            Self::Media => "media",
            Self::Quality => "quality",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single finding. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Source the finding belongs to; 0 for run-level findings.
    pub source_id: i64,
    pub issue_type: String,
    pub severity: Severity,
    pub message: String,
    pub field: Field,
    pub current_value: Option<String>,
    pub expected_value: Option<String>,
    pub category: Category,
}

impl Issue {
    pub fn new(
        source_id: i64,
        issue_type: impl Into<String>,
        severity: Severity,
        category: Category,
        field: Field,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_id,
            issue_type: issue_type.into(),
            severity,
            message: message.into(),
            field,
            current_value: None,
            expected_value: None,
            category,
        }
    }

    pub fn error(
        source_id: i64,
        issue_type: impl Into<String>,
        category: Category,
        field: Field,
        message: impl Into<String>,
    ) -> Self {
        Self::new(source_id, issue_type, Severity::Error, category, field, message)
    }

    pub fn warning(
        source_id: i64,
        issue_type: impl Into<String>,
        category: Category,
        field: Field,
        message: impl Into<String>,
    ) -> Self {
        Self::new(source_id, issue_type, Severity::Warning, category, field, message)
    }

    pub fn info(
        source_id: i64,
        issue_type: impl Into<String>,
        category: Category,
        field: Field,
        message: impl Into<String>,
    ) -> Self {
        Self::new(source_id, issue_type, Severity::Info, category, field, message)
    }

    pub fn with_current(mut self, value: impl Into<String>) -> Self {
        self.current_value = Some(value.into());
        self
    }

    pub fn with_expected(mut self, value: impl Into<String>) -> Self {
        self.expected_value = Some(value.into());
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({}): {}", self.severity, self.issue_type, self.field, self.message)
    }
}
