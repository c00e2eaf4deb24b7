//! Shared handler state

use std::sync::Arc;

use crate::auth::{AuthResult, AuthService, InMemoryUserRepository, TokenAuthority, UserService};
use crate::catalog::{CatalogService, InMemoryCatalog};
use crate::config::AuthConfig;

/// Services shared by every route
pub struct AppState {
    pub catalog: CatalogService<InMemoryCatalog>,
    pub auth: AuthService<InMemoryUserRepository, TokenAuthority>,
    pub users: UserService<InMemoryUserRepository, TokenAuthority>,
}

impl AppState {
    /// Empty catalog and user table
    pub fn new(auth_config: &AuthConfig) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let provider = Arc::new(TokenAuthority::new(auth_config.jwt_config()));

        Self {
            catalog: CatalogService::new(Arc::new(InMemoryCatalog::new())),
            auth: AuthService::new(Arc::clone(&users), Arc::clone(&provider)),
            users: UserService::new(users, provider),
        }
    }

    /// State with an admin account already present
    pub fn with_admin(auth_config: &AuthConfig, username: &str, password: &str) -> AuthResult<Self> {
        let state = Self::new(auth_config);
        state.auth.bootstrap_admin(username, password)?;
        Ok(state)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}
