// src/core/net.rs

// Synchronous GET against nflweather.com. One request at a time, no retries.

use std::error::Error;
use std::time::Duration;

use crate::config::consts::{BASE_URL, REQUEST_TIMEOUT_SECS, USER_AGENT};

pub struct Client {
    inner: reqwest::blocking::Client,
}

impl Client {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// Fetch `BASE_URL + path` and return the body. Non-2xx is an error;
    /// the caller decides whether to drop the page or abort.
    pub fn get(&self, path: &str) -> Result<String, Box<dyn Error>> {
        let url = join!(BASE_URL, path);
        let resp = self.inner.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.text()?)
    }
}
