// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod filter;
pub mod merge;
pub mod pipeline;
pub mod progress;
pub mod record;
pub mod rules;
pub mod runner;
pub mod source;
pub mod specs;
pub mod store;

pub use error::{ConfigError, FetchError, ParseError, PipelineError, ShapeError};
pub use record::{Category, Kind, Record};
pub use rules::{Rule, Source};
