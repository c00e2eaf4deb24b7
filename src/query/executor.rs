//! # Query Execution
//!
//! Applies compiled filter and sort clauses to a catalog snapshot, then
//! pages the result. Execution never mutates its input.

use std::cmp::Ordering;

use crate::catalog::Movie;

use super::field::FieldName;
use super::filter::{FilterClause, Scalar};
use super::sort::{SortClause, SortDirection};
use super::token::Operator;

/// A movie field value borrowed for comparison
#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

fn field_value(movie: &Movie, field: FieldName) -> FieldValue<'_> {
    match field {
        FieldName::Name => FieldValue::Text(&movie.name),
        FieldName::Director => FieldValue::Text(&movie.director),
        FieldName::Popularity => FieldValue::Number(movie.popularity),
        FieldName::ImdbScore => FieldValue::Number(movie.imdb_score),
    }
}

/// Runs filter → sort → paginate over a movie collection
pub struct QueryExecutor;

impl QueryExecutor {
    /// Execute a compiled query.
    ///
    /// Movies equal under every sort clause keep their input order.
    pub fn execute(
        movies: &[Movie],
        filters: &[FilterClause],
        sorts: &[SortClause],
        skip: usize,
        limit: usize,
    ) -> Vec<Movie> {
        let mut retained: Vec<&Movie> = movies
            .iter()
            .filter(|movie| Self::matches(movie, filters))
            .collect();

        if !sorts.is_empty() {
            // slice::sort_by is stable
            retained.sort_by(|a, b| Self::compare(a, b, sorts));
        }

        retained
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Checks if a movie matches all clauses (AND semantics)
    pub fn matches(movie: &Movie, filters: &[FilterClause]) -> bool {
        filters
            .iter()
            .all(|clause| Self::matches_clause(movie, clause))
    }

    fn matches_clause(movie: &Movie, clause: &FilterClause) -> bool {
        match (field_value(movie, clause.field), &clause.value) {
            (FieldValue::Text(actual), Scalar::Text(expected)) => match clause.operator {
                Operator::Contains => actual.to_lowercase().contains(&expected.to_lowercase()),
                Operator::Equals => actual == expected.as_str(),
                Operator::NotEquals => actual != expected.as_str(),
                Operator::LessThan => actual < expected.as_str(),
                Operator::LessOrEqual => actual <= expected.as_str(),
                Operator::GreaterThan => actual > expected.as_str(),
                Operator::GreaterOrEqual => actual >= expected.as_str(),
            },
            (FieldValue::Number(actual), Scalar::Number(bound)) => {
                clause.operator.compare(actual, *bound)
            }
            // Type mismatch never matches
            _ => false,
        }
    }

    /// Multi-key comparison: first clause decides, later clauses break ties
    pub fn compare(a: &Movie, b: &Movie, sorts: &[SortClause]) -> Ordering {
        for clause in sorts {
            let ordering = match (field_value(a, clause.field), field_value(b, clause.field)) {
                (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
                (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(&y),
                _ => Ordering::Equal,
            };

            let ordering = match clause.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };

            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, name: &str, director: &str, popularity: f64, imdb_score: f64) -> Movie {
        Movie {
            movie_id: id,
            name: name.to_string(),
            director: director.to_string(),
            popularity,
            imdb_score,
            genre: Vec::new(),
        }
    }

    fn catalog() -> Vec<Movie> {
        vec![
            movie(1, "The Wizard of Oz", "Victor Fleming", 83.0, 8.3),
            movie(2, "Star Wars", "George Lucas", 88.0, 8.8),
            movie(3, "Psycho", "Alfred Hitchcock", 87.0, 8.7),
            movie(4, "King Kong", "Merian C. Cooper", 80.0, 8.0),
        ]
    }

    fn ids(movies: &[Movie]) -> Vec<u64> {
        movies.iter().map(|m| m.movie_id).collect()
    }

    #[test]
    fn test_no_clauses_returns_natural_order() {
        let result = QueryExecutor::execute(&catalog(), &[], &[], 0, 100);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let filters = [FilterClause::contains(FieldName::Name, "STAR")];
        let result = QueryExecutor::execute(&catalog(), &filters, &[], 0, 100);
        assert_eq!(ids(&result), vec![2]);

        let filters = [FilterClause::contains(FieldName::Director, "hitch")];
        let result = QueryExecutor::execute(&catalog(), &filters, &[], 0, 100);
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_numeric_and_text_filters_combine_with_and() {
        let filters = [
            FilterClause::compare(FieldName::Popularity, Operator::GreaterOrEqual, 83.0),
            FilterClause::contains(FieldName::Name, "o"),
        ];
        let result = QueryExecutor::execute(&catalog(), &filters, &[], 0, 100);
        // Wizard of Oz (83, has 'o'), Psycho (87, has 'o'); Star Wars has no 'o'
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_descending_sort_with_tie_break() {
        let movies = vec![
            movie(1, "b", "x", 1.0, 8.0),
            movie(2, "a", "x", 1.0, 9.0),
            movie(3, "a", "x", 1.0, 8.0),
        ];
        let sorts = [
            SortClause::desc(FieldName::ImdbScore),
            SortClause::asc(FieldName::Name),
        ];
        let result = QueryExecutor::execute(&movies, &[], &sorts, 0, 100);
        assert_eq!(ids(&result), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable() {
        let movies = vec![
            movie(1, "c", "x", 50.0, 7.0),
            movie(2, "a", "x", 50.0, 7.0),
            movie(3, "b", "x", 50.0, 7.0),
        ];
        let sorts = [SortClause::desc(FieldName::Popularity)];
        let result = QueryExecutor::execute(&movies, &[], &sorts, 0, 100);
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_bounds() {
        let all = catalog();
        assert!(QueryExecutor::execute(&all, &[], &[], 10, 100).is_empty());
        assert!(QueryExecutor::execute(&all, &[], &[], 0, 0).is_empty());
        assert_eq!(ids(&QueryExecutor::execute(&all, &[], &[], 1, 2)), vec![2, 3]);
        assert_eq!(ids(&QueryExecutor::execute(&all, &[], &[], 3, 5)), vec![4]);
    }

    #[test]
    fn test_mismatched_clause_never_matches() {
        let clause = FilterClause {
            field: FieldName::Popularity,
            operator: Operator::Contains,
            value: Scalar::Text("8".to_string()),
        };
        assert!(!QueryExecutor::matches(&catalog()[0], &[clause]));
    }

    #[test]
    fn test_input_not_mutated() {
        let all = catalog();
        let before = all.clone();
        let sorts = [SortClause::asc(FieldName::Name)];
        let _ = QueryExecutor::execute(&all, &[], &sorts, 0, 100);
        assert_eq!(all, before);
    }
}
