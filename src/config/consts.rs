// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://anitrakt.huere.net/db/db_index_{kind}.php";
pub const TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("anitrakt_scrape/", env!("CARGO_PKG_VERSION"));

// Local page cache
pub const STORE_DIR: &str = ".store";

// Rules, overrides and output datasets
pub const DB_DIR: &str = "db";
pub const TIMESTAMP_FILE: &str = "updated.txt";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
