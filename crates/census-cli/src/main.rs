//! # census-check entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use census_cli::check::{run_check, CheckArgs};
use census_cli::rules::{run_rules, RulesArgs};
use census_cli::years::run_years;
use census_cli::{coded_message, EXIT_FATAL};
use census_core::tracing::{init_tracing, init_tracing_with_default};

/// Validate U.S. Federal Census source citations (1790–1950) stored in a
/// genealogy database.
#[derive(Parser, Debug)]
#[command(name = "census-check", version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity when CENSUS_LOG is unset (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file read in place of ./census.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check every source of one census year and print a report.
    Check(CheckArgs),

    /// List supported year keys.
    Years,

    /// Print the citation rule for a year key as JSON.
    Rules(RulesArgs),
}

fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 | 1 => "census=info",
        2 => "census=debug",
        _ => "census=trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose == 0 {
        init_tracing();
    } else {
        init_tracing_with_default(log_directive(cli.verbose));
    }

    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    tracing::debug!(root = %root.display(), "resolved working directory");

    let result = match &cli.command {
        Commands::Check(args) => run_check(args, cli.config.as_deref(), &root),
        Commands::Years => run_years(),
        Commands::Rules(args) => run_rules(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("{}", coded_message(&e));
            ExitCode::from(EXIT_FATAL)
        }
    }
}
