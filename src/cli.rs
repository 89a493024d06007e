use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dadjoke")]
#[command(about = "Get the best dad jokes right in your terminal", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Gets a random dad joke
    #[command(long_about = "Fetches a random joke from the icanhazdadjoke API")]
    Random {
        /// Search for dad jokes related to given term
        #[arg(long, default_value = "")]
        term: String,
    },
}
