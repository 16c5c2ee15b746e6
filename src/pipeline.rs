// src/pipeline.rs
//! One category, start to finish:
//!
//! ```text
//! FETCHED → PARSED → REMOTE_FILTERED → MERGED → ALL_FILTERED
//!         → LOCAL_FILTERED → SORTED → WRITTEN
//! ```
//!
//! Every stage consumes the previous stage's full output. Fetch and parse
//! failures abort the category; nothing is written unless every stage
//! succeeded. Once the dataset is in place the category counts as done: a
//! failed timestamp write is only a warning.

use std::path::PathBuf;

use chrono::Utc;

use crate::config::options::OutputOptions;
use crate::error::PipelineError;
use crate::filter;
use crate::merge::{self, Merged};
use crate::progress::Progress;
use crate::record::{Category, Record};
use crate::rules::Source;
use crate::source::{HtmlSource, read_cached};
use crate::specs;
use crate::store::CategoryConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Fetched,
    Parsed,
    RemoteFiltered,
    Merged,
    AllFiltered,
    LocalFiltered,
    Sorted,
    Written,
}

/// What a finished category run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySummary {
    pub parsed: usize,
    pub remote_removed: usize,
    pub replaced: usize,
    pub added: usize,
    pub all_removed: usize,
    pub local_removed: usize,
    pub written: usize,
    pub path: PathBuf,
    /// The completion timestamp was updated.
    pub stamped: bool,
}

/// Fetch, parse, process and write one category.
pub fn run_category(
    category: Category,
    config: &CategoryConfig,
    source: &dyn HtmlSource,
    output: &OutputOptions,
    progress: &mut dyn Progress,
) -> Result<CategorySummary, PipelineError> {
    let cached = source.fetch(category, progress)?;
    progress.stage(category, Stage::Fetched, 0);

    let html = read_cached(&cached)?;
    let parsed = specs::parse(category, &html, progress)?;
    progress.stage(category, Stage::Parsed, parsed.len());

    let mut summary = CategorySummary { parsed: parsed.len(), ..CategorySummary::default() };
    let records = process(category, parsed, config, &mut summary, progress);

    let path = output.dataset_path(category);
    crate::file::write_dataset(&path, category, &records)?;
    progress.stage(category, Stage::Written, records.len());
    progress.log(&format!("Written {} items to {}", records.len(), path.display()));

    match crate::file::write_timestamp(&output.timestamp_file, Utc::now()) {
        Ok(()) => summary.stamped = true,
        Err(e) => progress.warn(&format!("{category} dataset written but timestamp not updated: {e}")),
    }

    summary.written = records.len();
    summary.path = path;
    Ok(summary)
}

/// The pure part: filter, merge, filter again, combine and sort.
pub fn process(
    category: Category,
    parsed: Vec<Record>,
    config: &CategoryConfig,
    summary: &mut CategorySummary,
    progress: &mut dyn Progress,
) -> Vec<Record> {
    let remote = filter::apply(&parsed, &config.rules, Source::Remote, progress);
    summary.remote_removed = remote.removed;
    progress.stage(category, Stage::RemoteFiltered, remote.kept.len());

    let Merged { remote, overrides, replaced, added } =
        merge::merge(remote.kept, config.overrides.clone(), progress);
    summary.replaced = replaced;
    summary.added = added;
    progress.stage(category, Stage::Merged, remote.len() + overrides.len());

    let remote = filter::apply(&remote, &config.rules, Source::All, progress);
    summary.all_removed = remote.removed;
    progress.stage(category, Stage::AllFiltered, remote.kept.len());

    let overrides = filter::apply(&overrides, &config.rules, Source::Local, progress);
    summary.local_removed = overrides.removed;
    progress.stage(category, Stage::LocalFiltered, overrides.kept.len());

    let mut records = Merged { remote: remote.kept, overrides: overrides.kept, replaced, added }.combine();
    sort_by_mal_id(&mut records);
    progress.stage(category, Stage::Sorted, records.len());
    records
}

/// Stable: equal ids keep their relative order. Missing ids sort first.
pub fn sort_by_mal_id(records: &mut [Record]) {
    records.sort_by_key(|r| r.mal_id);
}
