//! # Query Grammar Validation
//!
//! Rejects malformed filter and sort parameters before compilation.
//!
//! Grammars:
//! - numeric filter: `^(gt|lt|gte|lte|ne):(\d+|\d+\.\d+)$`
//! - sort: `^(-?field,)*-?field$` over the sortable fields

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{QueryError, QueryResult};
use super::field::{FieldKind, FieldName};
use super::filter::FilterValue;
use super::token::QueryToken;

/// Human-readable numeric filter grammar
pub const NUMERIC_FILTER_GRAMMAR: &str = r"^(gt|lt|gte|lte|ne):(\d+|\d+\.\d+)$";

fn numeric_filter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NUMERIC_FILTER_GRAMMAR).expect("numeric filter grammar compiles"))
}

/// Sort grammar built from the field allow-list
pub fn sort_grammar() -> &'static str {
    static GRAMMAR: OnceLock<String> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        let fields = FieldName::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join("|");
        format!("^(-?({fields}),)*-?({fields})$")
    })
}

fn sort_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(sort_grammar()).expect("sort grammar compiles"))
}

/// Validates raw query parameters against the listing grammar
pub struct QueryValidator;

impl QueryValidator {
    /// Validate a raw filter parameter and turn it into compiler input.
    pub fn filter_value(field: FieldName, raw: &str) -> QueryResult<FilterValue> {
        match field.kind() {
            FieldKind::Text => Ok(FilterValue::Text(raw.to_string())),
            FieldKind::Numeric => Self::numeric_filter(field, raw).map(FilterValue::Comparison),
        }
    }

    /// Validate and parse a `<op>:<number>` token for a numeric field
    pub fn numeric_filter(field: FieldName, raw: &str) -> QueryResult<QueryToken> {
        let rejected = || QueryError::InvalidFilter {
            param: field.as_str().to_string(),
            value: raw.to_string(),
            expected: NUMERIC_FILTER_GRAMMAR.to_string(),
        };

        if !numeric_filter_regex().is_match(raw) {
            return Err(rejected());
        }

        QueryToken::parse(raw).ok_or_else(rejected)
    }

    /// Validate a sort specification. The empty string is valid (no sort).
    pub fn sort(raw: &str) -> QueryResult<()> {
        if raw.is_empty() || sort_regex().is_match(raw) {
            Ok(())
        } else {
            Err(QueryError::InvalidSort {
                value: raw.to_string(),
                expected: sort_grammar().to_string(),
            })
        }
    }
}
