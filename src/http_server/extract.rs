//! Bearer token extraction
//!
//! `AuthenticatedUser` resolves `Authorization: Bearer <token>` to a stored
//! user, rejecting the request with 401 otherwise.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::{AuthError, User};

use super::errors::ApiError;
use super::state::AppState;

/// The user named by the request's bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AuthError::AuthenticationRequired)?;
        let user = state.auth.authenticate(token)?;
        Ok(AuthenticatedUser(user))
    }
}
