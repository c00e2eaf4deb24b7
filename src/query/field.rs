//! Queryable movie fields
//!
//! The allow-list of fields that listing queries may filter or sort on.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{QueryError, QueryResult};

/// How a field's values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Case-insensitive substring match
    Text,
    /// Operator comparison against a decimal literal
    Numeric,
}

/// A field that can appear in a filter or sort clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Director,
    Popularity,
    ImdbScore,
}

impl FieldName {
    /// Every queryable field, in canonical order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Director,
        FieldName::Popularity,
        FieldName::ImdbScore,
    ];

    /// Parse a wire field name
    pub fn parse(name: &str) -> QueryResult<Self> {
        match name {
            "name" => Ok(FieldName::Name),
            "director" => Ok(FieldName::Director),
            "popularity" => Ok(FieldName::Popularity),
            "imdb_score" => Ok(FieldName::ImdbScore),
            other => Err(QueryError::UnknownField {
                field: other.to_string(),
            }),
        }
    }

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Director => "director",
            FieldName::Popularity => "popularity",
            FieldName::ImdbScore => "imdb_score",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Name | FieldName::Director => FieldKind::Text,
            FieldName::Popularity | FieldName::ImdbScore => FieldKind::Numeric,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_fields() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::parse(field.as_str()).unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert_eq!(
            FieldName::parse("genre"),
            Err(QueryError::UnknownField {
                field: "genre".to_string()
            })
        );
        // Wire names only, no camelCase aliases
        assert!(FieldName::parse("imdbScore").is_err());
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(FieldName::Name.kind(), FieldKind::Text);
        assert_eq!(FieldName::Director.kind(), FieldKind::Text);
        assert_eq!(FieldName::Popularity.kind(), FieldKind::Numeric);
        assert_eq!(FieldName::ImdbScore.kind(), FieldKind::Numeric);
    }
}
