//! Auth HTTP Routes
//!
//! `POST /login` exchanges form credentials for a bearer token.

use std::sync::Arc;

use axum::{
    extract::{Form, Json, State},
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::auth::TokenResponse;

use super::errors::ApiResult;
use super::state::AppState;

/// Auth routes with shared state
pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .with_state(state)
}

/// Password-grant login form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Json<TokenResponse>> {
    Ok(Json(state.auth.login(&form.username, &form.password)?))
}
