//! User HTTP Routes
//!
//! Reads are open; create, update and delete require an admin token.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};

use crate::auth::{CreateUserRequest, UpdateUserRequest, User};
use crate::query::Pagination;

use super::errors::ApiResult;
use super::extract::AuthenticatedUser;
use super::movie_routes::DeletedResponse;
use super::state::AppState;

/// User routes with shared state
pub fn user_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:username",
            get(read_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<User>>> {
    let page = Pagination::parse(param(&params, "skip"), param(&params, "limit"))?;
    Ok(Json(state.users.list(page.skip, page.limit)?))
}

async fn read_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.users.get(&username)?))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.users.create(&actor, request)?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(username): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.users.update(&actor, &username, request)?))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(username): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    state.users.delete(&actor, &username)?;
    Ok(Json(DeletedResponse::new()))
}
