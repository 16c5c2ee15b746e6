// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::record::Category;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub output: OutputOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    One(Category),
}

impl CategorySelector {
    pub fn categories(&self) -> Vec<Category> {
        match self {
            CategorySelector::All => Category::ALL.to_vec(),
            CategorySelector::One(c) => vec![*c],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Page URL; `{kind}` becomes `movies` or `shows`.
    pub base_url: String,
    pub timeout: Duration,
    pub categories: CategorySelector,
    /// Parse the cached pages without touching the network.
    pub offline: bool,
    /// Run the category pipelines on separate threads.
    pub parallel: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            categories: CategorySelector::All,
            offline: false,
            parallel: false,
        }
    }
}

impl ScrapeOptions {
    pub fn url_for(&self, category: Category) -> String {
        self.base_url.replace("{kind}", category.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    /// Holds rules and overrides as input, datasets as output.
    pub db_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub timestamp_file: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            db_dir: PathBuf::from(DB_DIR),
            cache_dir: PathBuf::from(STORE_DIR),
            timestamp_file: PathBuf::from(TIMESTAMP_FILE),
        }
    }
}

impl OutputOptions {
    /// `db/movies.json`, `db/tv.json`
    pub fn dataset_path(&self, category: Category) -> PathBuf {
        self.db_dir.join(join!(category.file_stem(), ".json"))
    }

    /// `db/ignore_movies.json`, `db/ignore_tv.json`
    pub fn rules_path(&self, category: Category) -> PathBuf {
        self.db_dir.join(join!("ignore_", category.file_stem(), ".json"))
    }

    /// `db/overwrite_movies.json`, `db/overwrite_tv.json`
    pub fn overrides_path(&self, category: Category) -> PathBuf {
        self.db_dir.join(join!("overwrite_", category.file_stem(), ".json"))
    }

    /// `.store/movies.html`, `.store/shows.html`
    pub fn cache_path(&self, category: Category) -> PathBuf {
        self.cache_dir.join(join!(category.as_str(), ".html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_defaults_come_from_consts() {
        let opts = AppOptions::default();
        assert_eq!(opts.scrape.timeout, Duration::from_secs(TIMEOUT_SECS));
        assert_eq!(opts.scrape.categories, CategorySelector::All);
        assert_eq!(opts.output.timestamp_file, PathBuf::from(TIMESTAMP_FILE));
    }

    #[test]
    fn file_names_follow_category_stems() {
        let out = OutputOptions::default();
        assert_eq!(out.dataset_path(Category::Shows), PathBuf::from("db").join("tv.json"));
        assert_eq!(out.rules_path(Category::Movies), PathBuf::from("db").join("ignore_movies.json"));
        assert_eq!(out.overrides_path(Category::Shows), PathBuf::from("db").join("overwrite_tv.json"));
        assert_eq!(out.cache_path(Category::Shows), PathBuf::from(".store").join("shows.html"));
    }

    #[test]
    fn url_template_is_filled() {
        let s = ScrapeOptions::default();
        assert_eq!(s.url_for(Category::Shows), "https://anitrakt.huere.net/db/db_index_shows.php");
    }
}
