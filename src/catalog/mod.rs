//! # Movie Catalog
//!
//! Movie and genre entities, their storage, and the admin-gated CRUD
//! service built on top of the query engine.

pub mod errors;
pub mod import;
pub mod model;
pub mod service;
pub mod store;

pub use errors::{CatalogError, CatalogResult};
pub use import::{import_file, import_movies};
pub use model::{Genre, Movie, MovieInput};
pub use service::CatalogService;
pub use store::{InMemoryCatalog, MovieRepository};
