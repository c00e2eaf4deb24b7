//! # HTTP Server Module
//!
//! axum application exposing the catalog.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /login` - Password login, returns a bearer token
//! - `/movies`, `/movies/:movie_id` - Movie listing and CRUD
//! - `/users`, `/users/:username` - User accounts

pub mod auth_routes;
pub mod config;
pub mod errors;
pub mod extract;
pub mod movie_routes;
pub mod server;
pub mod state;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use extract::AuthenticatedUser;
pub use server::{build_router, HttpServer};
pub use state::AppState;
