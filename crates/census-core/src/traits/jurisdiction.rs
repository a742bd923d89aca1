//! Independent-city jurisdiction lookup.
//!
//! Some places are "independent cities" that sit outside any county. A
//! citation naming one must say `(Independent City)` rather than `County`.
//! The lookup is optional: `NoJurisdictions` answers "unknown" for everything.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Reference data for one independent city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndependentCity {
    pub state: String,
    pub name: String,
    /// Literal text in an identifying name meaning the same-named county is meant.
    #[serde(default)]
    pub county_pattern: Option<String>,
    /// Literal text in an identifying name meaning the city itself is meant.
    #[serde(default)]
    pub city_pattern: Option<String>,
}

/// Answers whether a (state, place) pair is an independent city.
pub trait JurisdictionLookup {
    fn independent_city(&self, state: &str, place: &str) -> Option<&IndependentCity>;
}

/// Lookup used when no jurisdiction reference is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJurisdictions;

impl JurisdictionLookup for NoJurisdictions {
    fn independent_city(&self, _state: &str, _place: &str) -> Option<&IndependentCity> {
        None
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct JurisdictionFile {
    #[serde(default)]
    cities: Vec<IndependentCity>,
}

/// Lookup over a fixed list, usually loaded from a TOML file:
///
/// ```toml
/// [[cities]]
/// state = "Virginia"
/// name = "Alexandria"
/// city_pattern = "Alexandria City"
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticJurisdictions {
    cities: Vec<IndependentCity>,
}

impl StaticJurisdictions {
    pub fn new(cities: Vec<IndependentCity>) -> Self {
        Self { cities }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let file: JurisdictionFile =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::new(file.cities))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file: JurisdictionFile =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::new(file.cities))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl JurisdictionLookup for StaticJurisdictions {
    fn independent_city(&self, state: &str, place: &str) -> Option<&IndependentCity> {
        self.cities.iter().find(|c| {
            c.state.eq_ignore_ascii_case(state.trim()) && c.name.eq_ignore_ascii_case(place.trim())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_cities_from_toml() {
        let lookup = StaticJurisdictions::from_toml(
            r#"
[[cities]]
state = "Virginia"
name = "Alexandria"
city_pattern = "Alexandria City"

[[cities]]
state = "Maryland"
name = "Baltimore"
"#,
        )
        .unwrap();
        assert_eq!(lookup.len(), 2);
        let city = lookup.independent_city("virginia", "ALEXANDRIA").unwrap();
        assert_eq!(city.city_pattern.as_deref(), Some("Alexandria City"));
        assert!(city.county_pattern.is_none());
        assert!(lookup.independent_city("Ohio", "Stark").is_none());
    }

    #[test]
    fn no_jurisdictions_knows_nothing() {
        assert!(NoJurisdictions.independent_city("Virginia", "Alexandria").is_none());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = StaticJurisdictions::from_toml("[[cities]\nstate = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
