//! Fetcher configuration

use crate::error::{JokeError, Result};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://icanhazdadjoke.com/";
pub const USER_AGENT: &str = "Dadjoke CLI Tool (github.com/KennethSC/dadjoke)";
pub const ACCEPT_JSON: &str = "application/json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how the fetcher talks to the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request timeout; `None` disables it
    pub timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl FetcherConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve `path` against the base URL.
    ///
    /// The base is treated as a directory, so `http://host/api` joined with
    /// `search` gives `http://host/api/search`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base = Url::parse(&base).map_err(|e| {
            JokeError::RequestConstruction(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        base.join(path)
            .map_err(|e| JokeError::RequestConstruction(format!("invalid path '{}': {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_icanhazdadjoke() {
        let config = FetcherConfig::default();
        assert_eq!(config.endpoint("").unwrap().as_str(), "https://icanhazdadjoke.com/");
        assert_eq!(
            config.endpoint("search").unwrap().as_str(),
            "https://icanhazdadjoke.com/search"
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_base_without_trailing_slash_keeps_prefix() {
        let config = FetcherConfig::default().with_base_url("http://127.0.0.1:8080/api");
        assert_eq!(
            config.endpoint("search").unwrap().as_str(),
            "http://127.0.0.1:8080/api/search"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = FetcherConfig::default().with_base_url("not a url");
        let err = config.endpoint("").unwrap_err();
        assert!(matches!(err, JokeError::RequestConstruction(_)));
    }
}
