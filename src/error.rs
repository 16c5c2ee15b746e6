// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::record::Category;

/// A record whose fields break the movie/show shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("unknown record type {0:?} (expected \"movies\" or \"shows\")")]
    UnknownType(String),

    #[error("movie '{title}' carries a season ({season})")]
    MovieWithSeason { title: String, season: i64 },

    #[error("show '{title}' has no season")]
    ShowWithoutSeason { title: String },

    #[error("show '{title}' has invalid season {season} (must be > 0)")]
    InvalidSeason { title: String, season: i64 },
}

/// Retrieving the source page failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("cache file {}: {source}", path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The page (or one of its rows) does not have the expected structure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("could not find table body in {0} page")]
    MissingTable(Category),

    #[error("invalid row: {0}")]
    Row(String),
}

/// Rules or overrides file is unreadable or malformed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} contains a {found} record; expected {expected}", path.display())]
    WrongCategory { path: PathBuf, expected: Category, found: Category },
}

/// Everything that can abort one category's pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error encoding {category} dataset: {source}")]
    Encode {
        category: Category,
        #[source]
        source: serde_json::Error,
    },
}
