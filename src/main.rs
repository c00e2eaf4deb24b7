//! moviedb entry point
//!
//! Parses CLI arguments, dispatches, and prints fatal errors to stderr.
//! All logic lives in the CLI module.

use moviedb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
