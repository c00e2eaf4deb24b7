//! # Query Tokens
//!
//! Comparison operators and the `<op>:<number>` token used by numeric
//! filter parameters, e.g. `imdb_score=gte:8.5`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Equals
    #[serde(rename = "eq")]
    Equals,

    /// Not equals
    #[serde(rename = "ne")]
    NotEquals,

    /// Less than
    #[serde(rename = "lt")]
    LessThan,

    /// Less than or equal
    #[serde(rename = "lte")]
    LessOrEqual,

    /// Greater than
    #[serde(rename = "gt")]
    GreaterThan,

    /// Greater than or equal
    #[serde(rename = "gte")]
    GreaterOrEqual,

    /// Case-insensitive substring match (default for text fields)
    #[serde(rename = "contains")]
    Contains,
}

impl Operator {
    /// Get the operator keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "eq",
            Operator::NotEquals => "ne",
            Operator::LessThan => "lt",
            Operator::LessOrEqual => "lte",
            Operator::GreaterThan => "gt",
            Operator::GreaterOrEqual => "gte",
            Operator::Contains => "contains",
        }
    }

    /// Parse an operator keyword accepted in numeric filter tokens
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "eq" => Some(Operator::Equals),
            "ne" => Some(Operator::NotEquals),
            "lt" => Some(Operator::LessThan),
            "lte" => Some(Operator::LessOrEqual),
            "gt" => Some(Operator::GreaterThan),
            "gte" => Some(Operator::GreaterOrEqual),
            _ => None,
        }
    }

    /// Apply a numeric comparison `actual <op> bound`.
    ///
    /// `Contains` has no numeric meaning and never matches.
    pub fn compare(&self, actual: f64, bound: f64) -> bool {
        match self {
            Operator::Equals => actual == bound,
            Operator::NotEquals => actual != bound,
            Operator::LessThan => actual < bound,
            Operator::LessOrEqual => actual <= bound,
            Operator::GreaterThan => actual > bound,
            Operator::GreaterOrEqual => actual >= bound,
            Operator::Contains => false,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `<op>:<number>` filter token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryToken {
    pub operator: Operator,
    pub value: f64,
}

impl QueryToken {
    pub fn new(operator: Operator, value: f64) -> Self {
        Self { operator, value }
    }

    /// Parse a token that has already passed grammar validation.
    ///
    /// Returns `None` only for input outside the grammar.
    pub fn parse(raw: &str) -> Option<Self> {
        let (keyword, number) = raw.split_once(':')?;
        let operator = Operator::from_keyword(keyword)?;
        let value = number.parse::<f64>().ok()?;
        Some(Self { operator, value })
    }
}
