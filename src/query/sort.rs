//! # Sort Clauses
//!
//! Parses `-imdb_score,name` style sort specifications. The first clause is
//! the primary key; later clauses break ties in order.

use serde::Serialize;

use super::errors::{QueryError, QueryResult};
use super::field::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A single ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortClause {
    pub field: FieldName,
    pub direction: SortDirection,
}

impl SortClause {
    pub fn asc(field: FieldName) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: FieldName) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Builds sort clauses from a comma-separated specification
pub struct SortCompiler;

impl SortCompiler {
    /// Compile a sort specification.
    ///
    /// An empty specification yields no clauses (natural order).
    pub fn compile(spec: &str) -> QueryResult<Vec<SortClause>> {
        if spec.is_empty() {
            return Ok(Vec::new());
        }

        spec.split(',')
            .map(|token| {
                let (name, direction) = match token.strip_prefix('-') {
                    Some(rest) => (rest, SortDirection::Desc),
                    None => (token, SortDirection::Asc),
                };

                if name.is_empty() {
                    return Err(QueryError::InvalidSort {
                        value: spec.to_string(),
                        expected: "comma-separated field names, each optionally prefixed with '-'"
                            .to_string(),
                    });
                }

                let field = FieldName::parse(name)?;
                Ok(SortClause { field, direction })
            })
            .collect()
    }
}
