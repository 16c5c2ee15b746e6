// src/core/net.rs
// Blocking HTTP GET. One client per call; two pages per run.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

pub fn http_get(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let http = |source| FetchError::Http { url: s!(url), source };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(http)?;

    let resp = client.get(url).send().map_err(http)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
    }
    resp.text().map_err(http)
}
