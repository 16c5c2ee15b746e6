// src/progress.rs
//! Run context handed to every pipeline stage.
//!
//! The library never logs through globals; each stage reports to the
//! `Progress` it was given. The CLI plugs in [`TracingProgress`], tests use
//! [`NullProgress`] or their own recorder.

use crate::pipeline::Stage;
use crate::record::Category;

pub trait Progress {
    /// A category pipeline is starting.
    fn begin(&mut self, _category: Category) {}

    /// A stage completed; `count` is the number of records it produced.
    fn stage(&mut self, _category: Category, _stage: Stage, _count: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Recovered problem (skipped row, ambiguous override...).
    fn warn(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _category: Category, _ok: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards everything to `tracing`, tagged with the active category.
#[derive(Default)]
pub struct TracingProgress {
    current: Option<Category>,
}

impl TracingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn tag(&self) -> &'static str {
        self.current.map_or("-", Category::as_str)
    }
}

impl Progress for TracingProgress {
    fn begin(&mut self, category: Category) {
        self.current = Some(category);
        tracing::info!(category = category.as_str(), "Processing {category}");
    }

    fn stage(&mut self, category: Category, stage: Stage, count: usize) {
        tracing::debug!(category = category.as_str(), ?stage, count, "stage complete");
    }

    fn log(&mut self, msg: &str) {
        tracing::info!(category = self.tag(), "{msg}");
    }

    fn warn(&mut self, msg: &str) {
        tracing::warn!(category = self.tag(), "{msg}");
    }

    fn finish(&mut self, category: Category, ok: bool) {
        if ok {
            tracing::info!(category = category.as_str(), "Finished {category}");
        } else {
            tracing::error!(category = category.as_str(), "Aborted {category}");
        }
        self.current = None;
    }
}
