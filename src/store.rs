// src/store.rs
//! Local configuration: ignore rules and override records per category.
//!
//! Both are read once, before any network I/O. A missing file is the same
//! as an empty one; a malformed file is a [`ConfigError`].

use std::{fs, io, path::Path};

use serde::de::DeserializeOwned;

use crate::config::options::OutputOptions;
use crate::error::ConfigError;
use crate::progress::Progress;
use crate::record::{Category, Record};
use crate::rules::Rule;

/// Everything one category pipeline needs from disk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryConfig {
    pub rules: Vec<Rule>,
    pub overrides: Vec<Record>,
}

pub fn load_config(
    out: &OutputOptions,
    category: Category,
    progress: &mut dyn Progress,
) -> Result<CategoryConfig, ConfigError> {
    let rules = load_rules(&out.rules_path(category), progress)?;
    let overrides = load_overrides(&out.overrides_path(category), category, progress)?;
    progress.log(&format!(
        "Loaded {} ignore rules and {} overrides for {category}",
        rules.len(),
        overrides.len()
    ));
    Ok(CategoryConfig { rules, overrides })
}

pub fn load_rules(path: &Path, progress: &mut dyn Progress) -> Result<Vec<Rule>, ConfigError> {
    read_json_array(path, progress)
}

/// Overrides must all belong to `category`.
pub fn load_overrides(
    path: &Path,
    category: Category,
    progress: &mut dyn Progress,
) -> Result<Vec<Record>, ConfigError> {
    let records: Vec<Record> = read_json_array(path, progress)?;
    if let Some(stray) = records.iter().find(|r| r.category() != category) {
        return Err(ConfigError::WrongCategory {
            path: path.to_path_buf(),
            expected: category,
            found: stray.category(),
        });
    }
    Ok(records)
}

fn read_json_array<T: DeserializeOwned>(path: &Path, progress: &mut dyn Progress) -> Result<Vec<T>, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            progress.log(&format!("File not found: {}", path.display()));
            return Ok(Vec::new());
        }
        Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&text).map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
}
