//! Movie HTTP Routes
//!
//! Listing with filter/sort/pagination, plus admin-only create, update and
//! delete.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Serialize;

use crate::catalog::{Movie, MovieInput};
use crate::query::MovieQuery;

use super::errors::{ApiError, ApiResult};
use super::extract::AuthenticatedUser;
use super::state::AppState;

/// Movie routes with shared state
pub fn movie_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/:movie_id",
            get(read_movie).put(update_movie).delete(delete_movie),
        )
        .with_state(state)
}

/// Body returned by delete endpoints
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub detail: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self {
            detail: "Resource deleted",
        }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_movie_id(raw: &str) -> ApiResult<u64> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// GET /movies?name=..&director=..&popularity=gt:80&imdb_score=lte:8.5&sort=-popularity,name&skip=0&limit=100
async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Movie>>> {
    let query = MovieQuery::from_params(&params)?;
    Ok(Json(state.catalog.list(&query)?))
}

async fn read_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let id = parse_movie_id(&movie_id)?;
    Ok(Json(state.catalog.get(id)?))
}

async fn create_movie(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(input): Json<MovieInput>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let movie = state.catalog.create(&user, input)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(movie_id): Path<String>,
    Json(input): Json<MovieInput>,
) -> ApiResult<Json<Movie>> {
    let id = parse_movie_id(&movie_id)?;
    Ok(Json(state.catalog.update(&user, id, input)?))
}

async fn delete_movie(
    State(state): State<Arc<AppState>>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(movie_id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let id = parse_movie_id(&movie_id)?;
    state.catalog.delete(&user, id)?;
    Ok(Json(DeletedResponse::new()))
}
