//! `census-check years`: list supported year keys.

use anyhow::Result;

use census_analysis::rules::RuleRegistry;

use crate::EXIT_CLEAN;

pub fn run_years() -> Result<u8> {
    let registry = RuleRegistry::new();
    for key in registry.supported_keys() {
        let description = registry
            .get(&key)
            .map(|rule| rule.description.as_str())
            .unwrap_or_default();
        println!("{:<12} {description}", key.to_string());
    }
    Ok(EXIT_CLEAN)
}
