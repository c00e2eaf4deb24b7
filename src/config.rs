//! # Service Configuration
//!
//! JSON configuration file. Every field has a default, so an empty object
//! (or no file at all) yields a runnable development setup.
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8000 },
//!   "auth": { "jwt_secret": "...", "token_ttl_minutes": 30 },
//!   "bootstrap_admin": { "username": "admin@example.com", "password": "..." },
//!   "seed_file": "./imdb.json",
//!   "log_level": "info"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::JwtConfig;
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Token signing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,

    #[serde(default = "default_issuer")]
    pub issuer: String,

    #[serde(default = "default_issuer")]
    pub audience: String,
}

fn default_jwt_secret() -> String {
    JwtConfig::default().secret
}

fn default_token_ttl_minutes() -> i64 {
    30
}

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

fn default_issuer() -> String {
    "moviedb".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl_minutes(),
            issuer: default_issuer(),
            audience: default_issuer(),
        }
    }
}

impl AuthConfig {
    /// Token settings; the lifetime is clamped to `1..=MAX_TOKEN_TTL_MINUTES`
    pub fn jwt_config(&self) -> JwtConfig {
        let minutes = self.token_ttl_minutes.clamp(1, MAX_TOKEN_TTL_MINUTES);
        JwtConfig {
            secret: self.jwt_secret.clone(),
            access_token_ttl: Duration::minutes(minutes),
            issuer: self.issuer.clone(),
            audience: self.audience.clone(),
        }
    }
}

/// Admin account created at startup when missing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub bootstrap_admin: Option<AdminCredentials>,

    /// Movie seed document imported at startup
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

fn default_log_level() -> Severity {
    Severity::Info
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            auth: AuthConfig::default(),
            bootstrap_admin: None,
            seed_file: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("auth.jwt_secret must not be empty".into()));
        }

        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&self.auth.token_ttl_minutes) {
            return Err(ConfigError::Invalid(format!(
                "auth.token_ttl_minutes must be between 1 and {} (got {})",
                MAX_TOKEN_TTL_MINUTES, self.auth.token_ttl_minutes
            )));
        }

        if let Some(admin) = &self.bootstrap_admin {
            if admin.username.is_empty() || admin.password.is_empty() {
                return Err(ConfigError::Invalid(
                    "bootstrap_admin requires a username and password".into(),
                ));
            }
        }

        Ok(())
    }
}
