use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

use dadjoke::cli::Cli;
use dadjoke::commands::handle_command;
use dadjoke::JokeFetcher;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let fetcher = JokeFetcher::with_defaults().context("Failed to set up HTTP client")?;
    let mut rng = StdRng::from_entropy();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    handle_command(cli.command, &fetcher, &mut rng, &mut out)
}
