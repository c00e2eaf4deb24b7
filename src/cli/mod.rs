//! CLI module
//!
//! - serve: load configuration, bootstrap, run the HTTP server
//! - check-query: compile a listing query string and print the plan
//! - hash-password: print an Argon2id digest

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_query, load_config, prepare_state, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
