//! `census-check rules <YEAR_KEY>`: print a year's resolved rule as JSON.

use anyhow::{Context, Result};
use clap::Args;

use census_analysis::reporters::Reporter;
use census_analysis::reporters::summary::SummaryReporter;
use census_analysis::rules::RuleRegistry;
use census_analysis::runner::RunOutcome;

use crate::{EXIT_CLEAN, EXIT_UNSUPPORTED};

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Year key: 1790 through 1950 by decade, or 1850-slave / 1860-slave.
    pub year_key: String,
}

pub fn run_rules(args: &RulesArgs) -> Result<u8> {
    let registry = RuleRegistry::new();
    let Some(rule) = registry.resolve(&args.year_key) else {
        let outcome = RunOutcome::unsupported(&args.year_key, &registry);
        println!("{}", SummaryReporter.render(&outcome).map_err(anyhow::Error::msg)?);
        return Ok(EXIT_UNSUPPORTED);
    };
    let json = serde_json::to_string_pretty(rule).context("serializing rule")?;
    println!("{json}");
    Ok(EXIT_CLEAN)
}
