//! Document retrieval for the pipeline. Kept behind a trait so tests can
//! feed canned pages without a network.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Error;

#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, Error>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, Error> {
        let res = self.client.get(url).send().await?.error_for_status()?;
        Ok(res.text().await?)
    }
}

/// `base_url + region + "?q=" + terms joined by '+'`. Spaces inside a term
/// become '+' as well, matching what the marketplace expects.
pub fn build_search_url(base_url: &str, region: &str, terms: &[String]) -> String {
    format!("{}{}?q={}", base_url, region, terms.join("+").replace(' ', "+"))
}
