//! # Listing Query Parameters
//!
//! Turns raw `?key=value` pairs from the movie listing endpoint into a
//! validated, compiled query: filters, sort order and pagination.

use serde::Serialize;

use crate::catalog::Movie;

use super::errors::{QueryError, QueryResult};
use super::executor::QueryExecutor;
use super::field::{FieldKind, FieldName};
use super::filter::{FilterClause, FilterCompiler, FilterValue};
use super::sort::{SortClause, SortCompiler};
use super::validator::QueryValidator;

/// Default number of movies returned when `limit` is absent
pub const DEFAULT_LIMIT: usize = 100;

/// Offset/limit window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub skip: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Parse optional raw `skip` / `limit` values, applying defaults
    pub fn parse(skip: Option<&str>, limit: Option<&str>) -> QueryResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            skip: skip.map_or(Ok(defaults.skip), |v| parse_count("skip", v))?,
            limit: limit.map_or(Ok(defaults.limit), |v| parse_count("limit", v))?,
        })
    }
}

/// ASCII digits only, no sign
fn parse_count(param: &str, value: &str) -> QueryResult<usize> {
    let rejected = || QueryError::InvalidPagination {
        param: param.to_string(),
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(rejected());
    }
    value.parse().map_err(|_| rejected())
}

/// A compiled movie listing query
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MovieQuery {
    pub filters: Vec<FilterClause>,
    pub sorts: Vec<SortClause>,
    pub pagination: Pagination,
}

impl MovieQuery {
    /// Build a query from raw parameters in request order.
    ///
    /// `sort`, `skip` and `limit` are reserved; every other key is a filter
    /// on the field of the same name. Empty text filters are ignored.
    pub fn from_params(params: &[(String, String)]) -> QueryResult<Self> {
        let mut sort: Option<&str> = None;
        let mut skip: Option<&str> = None;
        let mut limit: Option<&str> = None;
        let mut filter_input: Vec<(FieldName, FilterValue)> = Vec::new();

        for (key, value) in params {
            match key.as_str() {
                "sort" => sort = Some(value.as_str()),
                "skip" => skip = Some(value.as_str()),
                "limit" => limit = Some(value.as_str()),
                _ => {
                    let field = FieldName::parse(key)?;
                    if field.kind() == FieldKind::Text && value.is_empty() {
                        continue;
                    }
                    filter_input.push((field, QueryValidator::filter_value(field, value)?));
                }
            }
        }

        let sort = sort.unwrap_or("");
        QueryValidator::sort(sort)?;

        Ok(Self {
            filters: FilterCompiler::compile(
                filter_input
                    .into_iter()
                    .map(|(field, value)| (field.as_str(), value)),
            )?,
            sorts: SortCompiler::compile(sort)?,
            pagination: Pagination::parse(skip, limit)?,
        })
    }

    /// Run this query over a catalog snapshot
    pub fn execute(&self, movies: &[Movie]) -> Vec<Movie> {
        QueryExecutor::execute(
            movies,
            &self.filters,
            &self.sorts,
            self.pagination.skip,
            self.pagination.limit,
        )
    }
}
