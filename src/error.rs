//! Error types for joke fetching

use std::fmt;
use thiserror::Error;

/// Which JSON document failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// Single joke returned by the root endpoint
    Joke,
    /// Outer search envelope
    Envelope,
    /// Nested `results` array inside the envelope
    Results,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecodeStage::Joke => "joke",
            DecodeStage::Envelope => "search envelope",
            DecodeStage::Results => "search results",
        };
        f.write_str(name)
    }
}

/// Errors from building, sending, or decoding a joke request
#[derive(Error, Debug)]
pub enum JokeError {
    /// Invalid URL or request that could not be built
    #[error("Failed to create a request for joke: {0}")]
    RequestConstruction(String),

    /// Connection failure, timeout, TLS error
    #[error("Request to get joke failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response arrived but the body could not be read
    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// Body was not the expected JSON
    #[error("Failed to decode {stage}: {source}")]
    Decode {
        stage: DecodeStage,
        #[source]
        source: serde_json::Error,
    },
}

impl JokeError {
    pub(crate) fn decode(stage: DecodeStage, source: serde_json::Error) -> Self {
        JokeError::Decode { stage, source }
    }

    /// Decode stage, if this is a decode failure
    pub fn decode_stage(&self) -> Option<DecodeStage> {
        match self {
            JokeError::Decode { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Result type alias for joke operations
pub type Result<T> = std::result::Result<T, JokeError>;
