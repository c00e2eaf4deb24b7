//! # Query Errors
//!
//! Validation failures raised while turning raw listing parameters into
//! filter and sort clauses. Every variant is a validation error: the caller
//! supplied something outside the query grammar.

use thiserror::Error;

/// Result type for query compilation
pub type QueryResult<T> = Result<T, QueryError>;

/// Query validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Field is not on the filter/sort allow-list
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// Filter value does not match the grammar for its field
    #[error("Invalid value for '{param}': {value:?} (expected {expected})")]
    InvalidFilter {
        param: String,
        value: String,
        expected: String,
    },

    /// Same field filtered more than once
    #[error("Duplicate filter for '{field}'")]
    DuplicateFilter { field: String },

    /// Sort specification does not match the sort grammar
    #[error("Invalid sort {value:?} (expected {expected})")]
    InvalidSort { value: String, expected: String },

    /// skip/limit is not a non-negative integer
    #[error("Invalid value for '{param}': {value:?} (expected a non-negative integer)")]
    InvalidPagination { param: String, value: String },
}

impl QueryError {
    /// Name of the query parameter that caused the rejection
    pub fn param(&self) -> &str {
        match self {
            QueryError::UnknownField { field } => field,
            QueryError::InvalidFilter { param, .. } => param,
            QueryError::DuplicateFilter { field } => field,
            QueryError::InvalidSort { .. } => "sort",
            QueryError::InvalidPagination { param, .. } => param,
        }
    }

    /// Grammar the parameter was expected to follow, when one applies
    pub fn expected(&self) -> Option<&str> {
        match self {
            QueryError::InvalidFilter { expected, .. } => Some(expected),
            QueryError::InvalidSort { expected, .. } => Some(expected),
            QueryError::InvalidPagination { .. } => Some("non-negative integer"),
            QueryError::UnknownField { .. } | QueryError::DuplicateFilter { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_names_offending_parameter() {
        let err = QueryError::InvalidFilter {
            param: "popularity".to_string(),
            value: "gt:abc".to_string(),
            expected: "<op>:<number>".to_string(),
        };
        assert_eq!(err.param(), "popularity");
        assert_eq!(err.expected(), Some("<op>:<number>"));

        let err = QueryError::InvalidSort {
            value: "-rating".to_string(),
            expected: "grammar".to_string(),
        };
        assert_eq!(err.param(), "sort");
    }

    #[test]
    fn test_message_includes_value() {
        let err = QueryError::InvalidPagination {
            param: "skip".to_string(),
            value: "-1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("skip"));
        assert!(msg.contains("-1"));
    }
}
