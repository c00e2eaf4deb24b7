//! CLI argument definitions using clap
//!
//! Commands:
//! - moviedb serve [--config <path>]
//! - moviedb check-query <query-string>
//! - moviedb hash-password <password>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// moviedb - movie catalog REST API
#[derive(Parser, Debug)]
#[command(name = "moviedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a movie listing query string and print the compiled plan
    CheckQuery {
        /// Raw query string, e.g. "imdb_score=lt:7&sort=-popularity"
        query: String,
    },

    /// Print the Argon2id digest of a password
    HashPassword {
        password: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
