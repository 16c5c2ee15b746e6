// src/filter.rs
//! Applies ignore rules of one source scope to a dataset.
//!
//! Rules are always exclusions: a record goes as soon as any selected rule
//! matches it. `ALL`/`ANY` only decides how a rule's own conditions combine.

use crate::progress::Progress;
use crate::record::Record;
use crate::rules::{Rule, Source};

/// Result of one filter pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtered {
    pub kept: Vec<Record>,
    pub removed: usize,
}

/// Keep the records no `scope` rule matches, in their original order.
pub fn apply(records: &[Record], rules: &[Rule], scope: Source, progress: &mut dyn Progress) -> Filtered {
    let selected: Vec<&Rule> = rules.iter().filter(|r| r.source == scope).collect();
    if selected.is_empty() {
        return Filtered { kept: records.to_vec(), removed: 0 };
    }

    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        match selected.iter().find(|rule| rule.matches(record)) {
            Some(rule) => progress.log(&format!("Ignoring {} - {}", record.label(), rule.description)),
            None => kept.push(record.clone()),
        }
    }

    let removed = records.len() - kept.len();
    if removed > 0 {
        progress.log(&format!("Filtered out {removed} items based on {scope} ignore rules"));
    }
    Filtered { kept, removed }
}
