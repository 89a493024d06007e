//! Command implementations for the dadjoke CLI

pub mod random;

use crate::cli::Commands;
use crate::client::JokeSource;
use anyhow::Result;
use rand::RngCore;
use std::io::Write;

pub fn handle_command(
    cmd: Commands,
    source: &dyn JokeSource,
    rng: &mut dyn RngCore,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        Commands::Random { term } => random::run(source, &term, rng, out),
    }
}
