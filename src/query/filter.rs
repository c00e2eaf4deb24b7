//! # Filter Clauses
//!
//! Typed predicate descriptions and the compiler that builds them from
//! field-keyed filter input. Compilation is pure: no I/O, no evaluation.

use serde::Serialize;

use super::errors::{QueryError, QueryResult};
use super::field::{FieldKind, FieldName};
use super::token::{Operator, QueryToken};

/// Value side of a filter clause
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

/// A single field/operator/value predicate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterClause {
    pub field: FieldName,
    pub operator: Operator,
    pub value: Scalar,
}

impl FilterClause {
    /// Substring filter on a text field
    pub fn contains(field: FieldName, text: impl Into<String>) -> Self {
        Self {
            field,
            operator: Operator::Contains,
            value: Scalar::Text(text.into()),
        }
    }

    /// Numeric comparison filter
    pub fn compare(field: FieldName, operator: Operator, value: f64) -> Self {
        Self {
            field,
            operator,
            value: Scalar::Number(value),
        }
    }
}

/// Filter input for one field, before compilation
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Plain string; substring match on text fields
    Text(String),
    /// `<op>:<number>` comparison on numeric fields
    Comparison(QueryToken),
}

/// Builds filter clauses from field-keyed input
pub struct FilterCompiler;

impl FilterCompiler {
    /// Compile `(field, value)` pairs into clauses, preserving input order.
    ///
    /// Each field may appear at most once. Text values are only valid on
    /// text fields and comparisons only on numeric fields.
    pub fn compile<I, K>(input: I) -> QueryResult<Vec<FilterClause>>
    where
        I: IntoIterator<Item = (K, FilterValue)>,
        K: AsRef<str>,
    {
        let mut clauses: Vec<FilterClause> = Vec::new();

        for (name, value) in input {
            let field = FieldName::parse(name.as_ref())?;

            if clauses.iter().any(|c| c.field == field) {
                return Err(QueryError::DuplicateFilter {
                    field: field.as_str().to_string(),
                });
            }

            let clause = match (field.kind(), value) {
                (FieldKind::Text, FilterValue::Text(text)) => FilterClause::contains(field, text),
                (FieldKind::Numeric, FilterValue::Comparison(token)) => {
                    FilterClause::compare(field, token.operator, token.value)
                }
                (FieldKind::Text, FilterValue::Comparison(token)) => {
                    return Err(QueryError::InvalidFilter {
                        param: field.as_str().to_string(),
                        value: format!("{}:{}", token.operator, token.value),
                        expected: "a plain search string".to_string(),
                    })
                }
                (FieldKind::Numeric, FilterValue::Text(text)) => {
                    return Err(QueryError::InvalidFilter {
                        param: field.as_str().to_string(),
                        value: text,
                        expected: "<op>:<number> with op one of gt, lt, gte, lte, ne".to_string(),
                    })
                }
            };

            clauses.push(clause);
        }

        Ok(clauses)
    }
}
