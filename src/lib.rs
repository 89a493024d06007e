//! Dad joke client for the icanhazdadjoke.com API
//!
//! Fetches a single random joke, or searches by term and picks one of the
//! matches at random.

#![warn(clippy::all)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod selector;

pub use client::{JokeFetcher, JokeSource};
pub use config::FetcherConfig;
pub use error::{DecodeStage, JokeError, Result};
pub use models::{Joke, SearchResult};
pub use selector::{pick_random_joke, Pick};

/// Printed when a term search matches nothing
pub const NO_JOKES_FOUND: &str = "No jokes could be found with the search term";
