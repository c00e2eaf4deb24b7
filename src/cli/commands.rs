//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use axum::extract::Query;
use axum::http::Uri;

use crate::auth::crypto::hash_password;
use crate::catalog::import_file;
use crate::config::AppConfig;
use crate::http_server::{AppState, HttpServer};
use crate::observability::Logger;
use crate::query::MovieQuery;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(config.as_deref()),
        Command::CheckQuery { query } => {
            let plan = check_query(&query)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Command::HashPassword { password } => {
            println!("{}", hash_password(&password)?);
            Ok(())
        }
    }
}

/// Load configuration, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> CliResult<AppConfig> {
    match path {
        Some(path) => Ok(AppConfig::load(path)?),
        None => Ok(AppConfig::default()),
    }
}

/// Build application state: bootstrap admin, then import the seed file
pub fn prepare_state(config: &AppConfig) -> CliResult<Arc<AppState>> {
    let state = AppState::new(&config.auth);

    match &config.bootstrap_admin {
        Some(admin) => {
            state.auth.bootstrap_admin(&admin.username, &admin.password)?;
        }
        None => Logger::warn("NO_BOOTSTRAP_ADMIN", &[("effect", "mutations unavailable")]),
    }

    if let Some(seed) = &config.seed_file {
        import_file(&state.catalog, seed)?;
    }

    Ok(Arc::new(state))
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    Logger::set_threshold(config.log_level);

    let state = prepare_state(&config)?;
    let server = HttpServer::new(config.server.clone(), state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Validate and compile a raw listing query string
pub fn check_query(raw: &str) -> CliResult<MovieQuery> {
    let uri: Uri = format!("/movies?{}", raw.trim_start_matches('?'))
        .parse()
        .map_err(|e| CliError::invalid_query(format!("{}", e)))?;

    let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(&uri)
        .map_err(|e| CliError::invalid_query(e.body_text()))?;

    Ok(MovieQuery::from_params(&params)?)
}
