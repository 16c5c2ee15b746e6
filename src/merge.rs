// src/merge.rs
//! Reconciles scraped records with manually curated overrides.
//!
//! Overrides win: one whose key matches scraped records replaces them
//! outright, one with no match is added. The two partitions stay apart so the
//! caller can run `all` rules on what remains of the scrape and `local` rules
//! on the overrides alone.

use std::collections::{HashMap, HashSet};

use crate::progress::Progress;
use crate::record::{Record, RecordKey};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Merged {
    /// Scraped records no override claimed, in scrape order.
    pub remote: Vec<Record>,
    /// Exactly the override list, in file order.
    pub overrides: Vec<Record>,
    /// Overrides that replaced at least one scraped record.
    pub replaced: usize,
    /// Overrides with no scraped counterpart.
    pub added: usize,
}

impl Merged {
    /// Overrides first, then the surviving scrape.
    pub fn combine(self) -> Vec<Record> {
        let mut out = self.overrides;
        out.extend(self.remote);
        out
    }
}

/// Every scraped record sharing an override's key is replaced, duplicates included.
pub fn merge(remote: Vec<Record>, overrides: Vec<Record>, progress: &mut dyn Progress) -> Merged {
    if overrides.is_empty() {
        return Merged { remote, ..Merged::default() };
    }

    let mut hits: HashMap<RecordKey, usize> = HashMap::new();
    for r in &remote {
        *hits.entry(r.key()).or_insert(0) += 1;
    }

    let claimed: HashSet<RecordKey> = overrides.iter().map(Record::key).collect();
    let (mut replaced, mut added) = (0usize, 0usize);
    for o in &overrides {
        match hits.get(&o.key()).copied().unwrap_or(0) {
            0 => {
                added += 1;
                progress.log(&format!("Added from overwrite: {}", o.label()));
            }
            n => {
                replaced += 1;
                progress.log(&format!("Replaced from overwrite: {}", o.label()));
                if n > 1 {
                    progress.warn(&format!("Override {} matched {n} scraped records; all were replaced", o.label()));
                }
            }
        }
    }

    let remote = remote.into_iter().filter(|r| !claimed.contains(&r.key())).collect();
    Merged { remote, overrides, replaced, added }
}
