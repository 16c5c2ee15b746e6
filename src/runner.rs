// src/runner.rs
//! Top-level runner: load every category's config, then run the pipelines.
//!
//! Config is read for all selected categories before any page is fetched.
//! A category whose config or pipeline fails is reported and skipped; the
//! other one still runs and writes its own files.

use std::thread;

use crate::config::options::AppOptions;
use crate::error::PipelineError;
use crate::pipeline::{self, CategorySummary};
use crate::progress::Progress;
use crate::record::Category;
use crate::source::HtmlSource;
use crate::store::{self, CategoryConfig};

pub type Outcome = Result<CategorySummary, PipelineError>;

/// Per-category results, in run order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<(Category, Outcome)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| o.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (Category, &PipelineError)> {
        self.outcomes.iter().filter_map(|(c, o)| o.as_ref().err().map(|e| (*c, e)))
    }

    pub fn get(&self, category: Category) -> Option<&Outcome> {
        self.outcomes.iter().find(|(c, _)| *c == category).map(|(_, o)| o)
    }
}

fn preload(
    opts: &AppOptions,
    progress: &mut dyn Progress,
) -> Vec<(Category, Result<CategoryConfig, PipelineError>)> {
    opts.scrape
        .categories
        .categories()
        .into_iter()
        .map(|c| (c, store::load_config(&opts.output, c, progress).map_err(PipelineError::from)))
        .collect()
}

fn run_one(
    category: Category,
    config: Result<CategoryConfig, PipelineError>,
    opts: &AppOptions,
    source: &dyn HtmlSource,
    progress: &mut dyn Progress,
) -> Outcome {
    progress.begin(category);
    let outcome = config.and_then(|cfg| pipeline::run_category(category, &cfg, source, &opts.output, progress));
    if let Err(e) = &outcome {
        progress.warn(&format!("Error processing {category}: {e}"));
    }
    progress.finish(category, outcome.is_ok());
    outcome
}

/// Sequential run, one category after the other.
pub fn run(opts: &AppOptions, source: &dyn HtmlSource, progress: &mut dyn Progress) -> RunReport {
    let configs = preload(opts, progress);
    let outcomes = configs
        .into_iter()
        .map(|(category, config)| (category, run_one(category, config, opts, source, progress)))
        .collect();
    RunReport { outcomes }
}

/// One scoped thread per category, each with its own progress sink.
pub fn run_parallel<P, F>(opts: &AppOptions, source: &(dyn HtmlSource + Sync), make_progress: F) -> RunReport
where
    P: Progress,
    F: Fn() -> P + Sync,
{
    let configs = preload(opts, &mut make_progress());

    let outcomes: Vec<(Category, Outcome)> = thread::scope(|scope| {
        let handles: Vec<_> = configs
            .into_iter()
            .map(|(category, config)| {
                let make_progress = &make_progress;
                let handle = scope.spawn(move || {
                    let mut progress = make_progress();
                    run_one(category, config, opts, source, &mut progress)
                });
                (category, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(category, h)| {
                let outcome = h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic));
                (category, outcome)
            })
            .collect()
    });
    RunReport { outcomes }
}
