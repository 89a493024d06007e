//! Wire types for the icanhazdadjoke API

use crate::error::{DecodeStage, JokeError, Result};
use serde::Deserialize;
use serde_json::value::RawValue;

/// A single joke
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "joke")]
    pub text: String,
    /// HTTP status echoed in the body; absent on search results
    #[serde(default)]
    pub status: i64,
}

/// Outer object returned by `/search`.
///
/// `results` is kept raw and decoded in a second pass.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub results: Box<RawValue>,
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub status: i64,
    pub total_jokes: i64,
}

/// Decoded term search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub total_count: i64,
    pub search_term: String,
    pub status: i64,
    /// Same order as the API response
    pub jokes: Vec<Joke>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.total_count <= 0 || self.jokes.is_empty()
    }
}

pub fn decode_joke(body: &[u8]) -> Result<Joke> {
    serde_json::from_slice(body).map_err(|e| JokeError::decode(DecodeStage::Joke, e))
}

pub fn decode_envelope(body: &[u8]) -> Result<SearchEnvelope> {
    serde_json::from_slice(body).map_err(|e| JokeError::decode(DecodeStage::Envelope, e))
}

pub fn decode_results(raw: &RawValue) -> Result<Vec<Joke>> {
    serde_json::from_str(raw.get()).map_err(|e| JokeError::decode(DecodeStage::Results, e))
}

/// Decode a search response: envelope first, then the nested results.
pub fn decode_search(body: &[u8]) -> Result<SearchResult> {
    let envelope = decode_envelope(body)?;
    let mut jokes = decode_results(&envelope.results)?;

    if envelope.total_jokes <= 0 {
        jokes.clear();
    }

    Ok(SearchResult {
        total_count: envelope.total_jokes,
        search_term: envelope.search_term,
        status: envelope.status,
        jokes,
    })
}
