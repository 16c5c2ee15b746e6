// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{BASE_URL, DB_DIR, STORE_DIR, TIMEOUT_SECS, TIMESTAMP_FILE};
use crate::config::options::{AppOptions, CategorySelector, OutputOptions, ScrapeOptions};
use crate::progress::TracingProgress;
use crate::record::Category;
use crate::runner::{self, RunReport};
use crate::source::{CachedSource, HtmlSource, HttpSource};

/// Scrape the AniTrakt MAL <-> Trakt tables into db/movies.json and db/tv.json
#[derive(Parser, Debug)]
#[command(name = "anitrakt_scrape", version)]
pub struct Args {
    /// Directory holding ignore/overwrite files and the output datasets
    #[arg(long, env = "ANITRAKT_DB_DIR", default_value = DB_DIR)]
    pub db_dir: PathBuf,

    /// Directory for the cached source pages
    #[arg(long, default_value = STORE_DIR)]
    pub cache_dir: PathBuf,

    /// Page URL; `{kind}` is replaced by `movies` or `shows`
    #[arg(long, env = "ANITRAKT_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// File receiving the UTC completion time
    #[arg(long, default_value = TIMESTAMP_FILE)]
    pub timestamp_file: PathBuf,

    /// Only process one category
    #[arg(long, value_enum)]
    pub only: Option<Only>,

    /// Parse the cached pages instead of fetching
    #[arg(long)]
    pub offline: bool,

    /// Run movies and shows on separate threads
    #[arg(long)]
    pub parallel: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Only {
    Movies,
    Shows,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let categories = match self.only {
            None => CategorySelector::All,
            Some(Only::Movies) => CategorySelector::One(Category::Movies),
            Some(Only::Shows) => CategorySelector::One(Category::Shows),
        };
        AppOptions {
            scrape: ScrapeOptions {
                base_url: self.base_url.clone(),
                timeout: Duration::from_secs(self.timeout),
                categories,
                offline: self.offline,
                parallel: self.parallel,
            },
            output: OutputOptions {
                db_dir: self.db_dir.clone(),
                cache_dir: self.cache_dir.clone(),
                timestamp_file: self.timestamp_file.clone(),
            },
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "anitrakt_scrape=debug" } else { "anitrakt_scrape=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let opts = args.to_options();

    let started = std::time::Instant::now();
    tracing::info!("Starting AniTrakt database parsing");

    let source: Box<dyn HtmlSource + Sync> = if opts.scrape.offline {
        Box::new(CachedSource { output: opts.output.clone() })
    } else {
        Box::new(HttpSource::new(opts.scrape.clone(), opts.output.clone()))
    };

    let report = if opts.scrape.parallel {
        runner::run_parallel(&opts, source.as_ref(), TracingProgress::new)
    } else {
        runner::run(&opts, source.as_ref(), &mut TracingProgress::new())
    };

    report_summary(&report);
    if !report.is_success() {
        let failed: Vec<String> = report.failed().map(|(c, e)| format!("{c}: {e}")).collect();
        return Err(eyre!("parsing failed for {}", failed.join("; ")));
    }
    tracing::info!("Parsing completed successfully in {:.2} seconds", started.elapsed().as_secs_f64());
    Ok(())
}

fn report_summary(report: &RunReport) {
    for (category, outcome) in &report.outcomes {
        if let Ok(s) = outcome {
            tracing::info!(
                category = category.as_str(),
                "{} parsed, {} remote-ignored, {} replaced, {} added, {} ignored, {} local-ignored, {} written",
                s.parsed, s.remote_removed, s.replaced, s.added, s.all_removed, s.local_removed, s.written
            );
        }
    }
}
