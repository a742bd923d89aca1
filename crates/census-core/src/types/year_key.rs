//! Year keys: a bare census year, or a year plus a schedule variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Schedule variants that get their own rule record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScheduleVariant {
    Slave,
}

impl ScheduleVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slave => "slave",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "slave" => Some(Self::Slave),
            _ => None,
        }
    }
}

/// Key into the rule registry.
///
/// Ordering is numeric-then-string: every bare year sorts before every
/// variant key, and variant keys sort by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YearKey {
    Year(u16),
    Variant(u16, ScheduleVariant),
}

impl YearKey {
    pub fn year(&self) -> u16 {
        match self {
            Self::Year(y) | Self::Variant(y, _) => *y,
        }
    }

    pub fn variant(&self) -> Option<ScheduleVariant> {
        match self {
            Self::Year(_) => None,
            Self::Variant(_, v) => Some(*v),
        }
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(y) => write!(f, "{y}"),
            Self::Variant(y, v) => write!(f, "{y}-{}", v.as_str()),
        }
    }
}

/// Error returned when a string is not a well-formed year key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed year key '{0}'")]
pub struct YearKeyParseError(pub String);

impl FromStr for YearKey {
    type Err = YearKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year_part, variant_part) = match trimmed.split_once('-') {
            Some((y, v)) => (y, Some(v)),
            None => (trimmed, None),
        };
        let year: u16 = year_part
            .parse()
            .map_err(|_| YearKeyParseError(s.to_string()))?;
        match variant_part {
            None => Ok(Self::Year(year)),
            Some(v) => ScheduleVariant::parse_str(v)
                .map(|variant| Self::Variant(year, variant))
                .ok_or_else(|| YearKeyParseError(s.to_string())),
        }
    }
}

impl Serialize for YearKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
