//! moviedb - movie catalog REST API
//!
//! Movies and users behind an admin-gated CRUD API, with a typed
//! filter/sort/paginate engine for the movie listing endpoint.

pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod query;
