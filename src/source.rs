// src/source.rs
//! Where the raw page HTML comes from.
//!
//! The pipeline always parses the cached copy: a source either refreshes the
//! cache from the network ([`HttpSource`]) or trusts what is already there
//! ([`CachedSource`], the offline mode).

use std::{fs, path::{Path, PathBuf}};

use crate::config::options::{OutputOptions, ScrapeOptions};
use crate::core::{net, sanitize::minify_html};
use crate::error::FetchError;
use crate::file::write_atomic;
use crate::progress::Progress;
use crate::record::Category;

pub trait HtmlSource {
    /// Make sure the cache holds a page for `category` and return its path.
    fn fetch(&self, category: Category, progress: &mut dyn Progress) -> Result<PathBuf, FetchError>;
}

/// Read back a cached page.
pub fn read_cached(path: &Path) -> Result<String, FetchError> {
    fs::read_to_string(path).map_err(|source| FetchError::Cache { path: path.to_path_buf(), source })
}

/// Live fetch, minified into the cache.
pub struct HttpSource {
    pub scrape: ScrapeOptions,
    pub output: OutputOptions,
}

impl HttpSource {
    pub fn new(scrape: ScrapeOptions, output: OutputOptions) -> Self {
        Self { scrape, output }
    }
}

impl HtmlSource for HttpSource {
    fn fetch(&self, category: Category, progress: &mut dyn Progress) -> Result<PathBuf, FetchError> {
        let url = self.scrape.url_for(category);
        progress.log(&format!("Fetching {category} data from {url}"));
        let html = net::http_get(&url, self.scrape.timeout)?;

        let path = self.output.cache_path(category);
        write_atomic(&path, minify_html(&html).as_bytes())
            .map_err(|source| FetchError::Cache { path: path.clone(), source })?;
        Ok(path)
    }
}

/// No network; fails when the cache is empty.
pub struct CachedSource {
    pub output: OutputOptions,
}

impl HtmlSource for CachedSource {
    fn fetch(&self, category: Category, progress: &mut dyn Progress) -> Result<PathBuf, FetchError> {
        let path = self.output.cache_path(category);
        if !path.is_file() {
            return Err(FetchError::Cache {
                path,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no cached page (run once online)"),
            });
        }
        progress.log(&format!("Using cached {category} page {}", path.display()));
        Ok(path)
    }
}
