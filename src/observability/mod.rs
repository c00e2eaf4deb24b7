//! Observability for the catalog service
//!
//! Structured one-line JSON events on stdout (stderr for errors).
//!
//! ```ignore
//! use moviedb::observability::Logger;
//!
//! Logger::info("MOVIE_QUERY", &[("filters", "2"), ("results", "10")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
