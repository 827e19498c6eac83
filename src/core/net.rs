// src/core/net.rs

// Blocking HTTPS GET behind a small trait so page specs can be fed canned HTML.

use std::error::Error;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::config::options::ExtractOptions;

/// Anything that can turn a URL into a response body.
/// Non-success responses must come back as `Err`.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// reqwest-backed fetcher: one client per instance, fixed timeout and UA.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ExtractOptions) -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&opts.user_agent)?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(opts.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.text()?)
    }
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        (**self).get(url)
    }
}

impl<F: Fetch + ?Sized> Fetch for Box<F> {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        (**self).get(url)
    }
}
