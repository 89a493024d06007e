//! `dadjoke random [--term <TERM>]`

use crate::client::JokeSource;
use crate::selector::{pick_random_joke, Pick};
use crate::NO_JOKES_FOUND;
use anyhow::{Context, Result};
use log::info;
use rand::RngCore;
use std::io::Write;

/// Print one joke: a random one, or a random match for `term` when it is non-empty.
///
/// Writes exactly one line on success and nothing on failure.
pub fn run(source: &dyn JokeSource, term: &str, rng: &mut dyn RngCore, out: &mut dyn Write) -> Result<()> {
    let line = if term.is_empty() {
        let joke = source
            .fetch_random_joke()
            .context("Failed to fetch a random joke")?;
        joke.text
    } else {
        let result = source
            .fetch_jokes_by_term(term)
            .with_context(|| format!("Failed to search jokes for '{}'", term))?;

        match pick_random_joke(&result, rng) {
            Pick::Found(joke) => joke.text.clone(),
            Pick::NotFound => {
                info!("No jokes matched '{}'", term);
                NO_JOKES_FOUND.to_string()
            }
        }
    };

    writeln!(out, "{}", line)?;
    Ok(())
}
