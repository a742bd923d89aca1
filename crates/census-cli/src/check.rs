//! `census-check check <YEAR_KEY>`: validate one census year's sources.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use census_analysis::media::MediaLayout;
use census_analysis::reporters::{available_formats, create_reporter};
use census_analysis::rules::RuleRegistry;
use census_analysis::runner::{RunOptions, RunOutcome, Runner};
use census_core::config::{CensusConfig, CliOverrides};
use census_core::errors::ConfigError;
use census_core::traits::StaticJurisdictions;
use census_storage::SqliteSourceStore;

use crate::{EXIT_CLEAN, EXIT_FINDINGS, EXIT_UNSUPPORTED};

/// Arguments of the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Year key: 1790 through 1950 by decade, or 1850-slave / 1860-slave.
    pub year_key: String,

    /// Genealogy database to read (overrides `database.path`).
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Directory substituted for the `?` placeholder in stored media paths.
    #[arg(long)]
    pub media_root: Option<PathBuf>,

    /// Compare media links against the year's image folder.
    #[arg(long)]
    pub check_media: bool,

    /// Include informational findings.
    #[arg(long)]
    pub include_info: bool,

    /// Output format: summary, verbose, or json.
    #[arg(long)]
    pub format: Option<String>,
}

impl CheckArgs {
    fn overrides(&self, config_file: Option<&Path>) -> CliOverrides {
        CliOverrides {
            config_file: config_file.map(Path::to_path_buf),
            database_path: self.db.as_ref().map(|p| p.display().to_string()),
            media_root: self.media_root.as_ref().map(|p| p.display().to_string()),
            media_check: self.check_media.then_some(true),
            include_info: self.include_info.then_some(true),
            format: self.format.clone(),
        }
    }
}

/// Run one check and print the rendered report to stdout.
pub fn run_check(args: &CheckArgs, config_file: Option<&Path>, root: &Path) -> Result<u8> {
    let config = CensusConfig::load(root, Some(&args.overrides(config_file)))?;
    let format = config.report.effective_format();
    let reporter = create_reporter(format).ok_or_else(|| ConfigError::InvalidValue {
        field: "report.format".to_string(),
        message: format!("unknown format '{format}', expected one of {}", available_formats().join(", ")),
    })?;

    let registry = RuleRegistry::new();
    if registry.resolve(&args.year_key).is_none() {
        warn!(year_key = %args.year_key, "unsupported year key");
        let outcome = RunOutcome::unsupported(&args.year_key, &registry);
        println!("{}", reporter.render(&outcome).map_err(anyhow::Error::msg)?);
        return Ok(EXIT_UNSUPPORTED);
    }

    let db_path = config.database.path.as_deref().ok_or_else(|| ConfigError::MissingSetting {
        field: "database.path".to_string(),
        hint: "pass --db or set it in census.toml".to_string(),
    })?;
    let store = SqliteSourceStore::open(Path::new(db_path))?;

    let jurisdictions = match config.jurisdictions.file.as_deref() {
        Some(file) => Some(StaticJurisdictions::load(Path::new(file))?),
        None => None,
    };

    let options = RunOptions {
        include_info: config.report.effective_include_info(),
        check_media: config.media.effective_check(),
    };
    let layout = match (options.check_media, MediaLayout::from_config(&config.media)) {
        (true, None) => {
            return Err(ConfigError::MissingSetting {
                field: "media.root".to_string(),
                hint: "required by --check-media; pass --media-root".to_string(),
            }
            .into())
        }
        (_, layout) => layout,
    };

    let mut runner = Runner::new(&store).with_options(options);
    if let Some(lookup) = &jurisdictions {
        runner = runner.with_jurisdictions(lookup);
    }
    if let Some(layout) = layout {
        runner = runner.with_media(&store, layout);
    }

    let outcome = runner
        .run(&args.year_key)
        .with_context(|| format!("checking year {}", args.year_key))?;
    println!("{}", reporter.render(&outcome).map_err(anyhow::Error::msg)?);

    let code = match outcome.report() {
        Some(report) if report.has_errors() => EXIT_FINDINGS,
        Some(_) => EXIT_CLEAN,
        None => EXIT_UNSUPPORTED,
    };
    info!(exit_code = code, "check finished");
    Ok(code)
}
