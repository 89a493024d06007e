//! HTTP client for the icanhazdadjoke API

use crate::config::{FetcherConfig, ACCEPT_JSON};
use crate::error::{JokeError, Result};
use crate::models::{decode_joke, decode_search, Joke, SearchResult};
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::Url;

/// Anything that can hand out jokes
pub trait JokeSource {
    /// Fetch one random joke
    fn fetch_random_joke(&self) -> Result<Joke>;

    /// Search jokes matching `term`
    fn fetch_jokes_by_term(&self, term: &str) -> Result<SearchResult>;
}

/// Blocking fetcher backed by reqwest
pub struct JokeFetcher {
    config: FetcherConfig,
    client: reqwest::blocking::Client,
}

impl JokeFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| JokeError::RequestConstruction(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(FetcherConfig::default())
    }

    /// GET `url` with the JSON accept header and return the whole body.
    fn request_joke(&self, url: Url, query: &[(&str, &str)]) -> Result<Vec<u8>> {
        let mut request = self.client.get(url).header(ACCEPT, ACCEPT_JSON);
        if !query.is_empty() {
            request = request.query(query);
        }

        let request = request
            .build()
            .map_err(|e| JokeError::RequestConstruction(e.to_string()))?;

        debug!("GET {}", request.url());

        let response = self.client.execute(request).map_err(JokeError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("API responded with {}", status);
        }

        let body = response.bytes().map_err(JokeError::BodyRead)?;
        debug!("Received {} bytes (status {})", body.len(), status);

        Ok(body.to_vec())
    }
}

impl JokeSource for JokeFetcher {
    fn fetch_random_joke(&self) -> Result<Joke> {
        let url = self.config.endpoint("")?;
        let body = self.request_joke(url, &[])?;
        decode_joke(&body)
    }

    fn fetch_jokes_by_term(&self, term: &str) -> Result<SearchResult> {
        let url = self.config.endpoint("search")?;
        let body = self.request_joke(url, &[("term", term)])?;
        let result = decode_search(&body)?;

        debug!(
            "Search '{}' matched {} jokes, {} returned",
            result.search_term,
            result.total_count,
            result.jokes.len()
        );

        Ok(result)
    }
}
