//! # Movie Query Engine
//!
//! Filter/sort/paginate pipeline behind the movie listing endpoint:
//!
//! raw parameters → [`QueryValidator`] → [`QueryToken`] parsing →
//! [`FilterCompiler`] / [`SortCompiler`] → [`QueryExecutor`]
//!
//! Everything here is pure and synchronous.

pub mod errors;
pub mod executor;
pub mod field;
pub mod filter;
pub mod params;
pub mod sort;
pub mod token;
pub mod validator;

pub use errors::{QueryError, QueryResult};
pub use executor::QueryExecutor;
pub use field::{FieldKind, FieldName};
pub use filter::{FilterClause, FilterCompiler, FilterValue, Scalar};
pub use params::{MovieQuery, Pagination, DEFAULT_LIMIT};
pub use sort::{SortClause, SortCompiler, SortDirection};
pub use token::{Operator, QueryToken};
pub use validator::QueryValidator;
