//! Listing Query Properties
//!
//! End-to-end behaviour of the filter → sort → paginate pipeline over a
//! small catalog:
//! - pagination is a contiguous slice of the full ordering
//! - filters combine with AND
//! - sorting is stable and earlier keys dominate
//! - malformed parameters are rejected before any movie is touched

use moviedb::auth::User;
use moviedb::catalog::{CatalogService, InMemoryCatalog, Movie, MovieInput};
use moviedb::query::{MovieQuery, QueryError};
use std::sync::Arc;

// =============================================================================
// Helper Functions
// =============================================================================

fn admin() -> User {
    User::new("admin@example.com", "unused".to_string(), true)
}

fn input(name: &str, director: &str, popularity: f64, imdb_score: f64, genre: &[&str]) -> MovieInput {
    MovieInput {
        name: name.to_string(),
        director: director.to_string(),
        popularity,
        imdb_score,
        genre: genre.iter().map(|g| g.to_string()).collect(),
    }
}

fn seeded_catalog() -> CatalogService<InMemoryCatalog> {
    let catalog = CatalogService::new(Arc::new(InMemoryCatalog::new()));
    let admin = admin();

    let movies = [
        input("Cabiria", "Giovanni Pastrone", 66.0, 6.6, &["Adventure", " Drama", "War"]),
        input("Star Wars", "George Lucas", 88.0, 8.8, &["Action", "Adventure", "Sci-Fi"]),
        input("King Kong", "Merian C. Cooper", 80.0, 8.0, &["Adventure", "Horror"]),
        input("The Wizard of Oz", "Victor Fleming", 83.0, 8.3, &["Family", "Fantasy"]),
        input("Psycho", "Alfred Hitchcock", 87.0, 8.7, &["Horror", "Mystery"]),
        input("Alice in Wonderland", "Clyde Geronimi", 73.0, 7.3, &["Animation", "Family"]),
        input("Metropolis", "Fritz Lang", 83.0, 8.3, &["Drama", "Sci-Fi"]),
    ];
    for movie in movies {
        catalog.create(&admin, movie).unwrap();
    }
    catalog
}

fn list(catalog: &CatalogService<InMemoryCatalog>, query: &str) -> Result<Vec<Movie>, QueryError> {
    let params: Vec<(String, String)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k.to_string(), v.to_string())
        })
        .collect();
    let query = MovieQuery::from_params(&params)?;
    Ok(catalog.list(&query).unwrap())
}

fn names(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.name.as_str()).collect()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_imdb_score_below_seven() {
    let catalog = seeded_catalog();
    let movies = list(&catalog, "imdb_score=lt:7").unwrap();
    assert_eq!(names(&movies), vec!["Cabiria"]);
}

#[test]
fn test_second_most_popular() {
    let catalog = seeded_catalog();
    let movies = list(&catalog, "sort=-popularity&skip=1&limit=1").unwrap();
    assert_eq!(names(&movies), vec!["Psycho"]);
}

#[test]
fn test_no_parameters_returns_natural_order() {
    let catalog = seeded_catalog();
    let movies = list(&catalog, "").unwrap();
    let ids: Vec<u64> = movies.iter().map(|m| m.movie_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

// =============================================================================
// Pagination Tests
// =============================================================================

/// Every window is the matching slice of the unpaginated ordering.
#[test]
fn test_pagination_is_a_slice() {
    let catalog = seeded_catalog();
    let full = list(&catalog, "sort=-imdb_score,name").unwrap();

    for skip in 0..9 {
        for limit in 0..9 {
            let page = list(&catalog, &format!("sort=-imdb_score,name&skip={skip}&limit={limit}")).unwrap();
            let expected: Vec<Movie> = full.iter().skip(skip).take(limit).cloned().collect();
            assert_eq!(page, expected, "skip={skip} limit={limit}");
        }
    }
}

#[test]
fn test_skip_past_end_is_empty() {
    let catalog = seeded_catalog();
    assert!(list(&catalog, "skip=50").unwrap().is_empty());
}

// =============================================================================
// Filter Tests
// =============================================================================

/// Adding a filter never grows the result set.
#[test]
fn test_filters_combine_with_and() {
    let catalog = seeded_catalog();
    let by_score = list(&catalog, "imdb_score=gte:8").unwrap();
    let by_popularity = list(&catalog, "popularity=lt:85").unwrap();
    let both = list(&catalog, "imdb_score=gte:8&popularity=lt:85").unwrap();

    assert_eq!(names(&both), vec!["King Kong", "The Wizard of Oz", "Metropolis"]);
    for movie in &both {
        assert!(by_score.contains(movie));
        assert!(by_popularity.contains(movie));
    }
}

#[test]
fn test_text_filters_are_case_insensitive_substrings() {
    let catalog = seeded_catalog();
    assert_eq!(names(&list(&catalog, "name=WARS").unwrap()), vec!["Star Wars"]);
    assert_eq!(names(&list(&catalog, "director=hitch").unwrap()), vec!["Psycho"]);
}

#[test]
fn test_empty_text_filter_is_ignored() {
    let catalog = seeded_catalog();
    assert_eq!(list(&catalog, "name=").unwrap().len(), 7);
}

#[test]
fn test_not_equal_filter() {
    let catalog = seeded_catalog();
    let movies = list(&catalog, "popularity=ne:83").unwrap();
    assert_eq!(movies.len(), 5);
    assert!(movies.iter().all(|m| m.popularity != 83.0));
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_first_sort_key_dominates() {
    let catalog = seeded_catalog();
    let movies = list(&catalog, "sort=-imdb_score,name").unwrap();
    assert_eq!(
        names(&movies),
        vec![
            "Star Wars",
            "Psycho",
            "Metropolis",
            "The Wizard of Oz",
            "King Kong",
            "Alice in Wonderland",
            "Cabiria",
        ]
    );
}

/// Ties keep natural order in both directions.
#[test]
fn test_sort_is_stable() {
    let catalog = seeded_catalog();

    let ascending = list(&catalog, "sort=popularity&popularity=ne:88").unwrap();
    let tied: Vec<&str> = names(&ascending)
        .into_iter()
        .filter(|n| *n == "The Wizard of Oz" || *n == "Metropolis")
        .collect();
    assert_eq!(tied, vec!["The Wizard of Oz", "Metropolis"]);

    let descending = list(&catalog, "sort=-popularity").unwrap();
    let tied: Vec<&str> = names(&descending)
        .into_iter()
        .filter(|n| *n == "The Wizard of Oz" || *n == "Metropolis")
        .collect();
    assert_eq!(tied, vec!["The Wizard of Oz", "Metropolis"]);
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_numeric_grammar() {
    let catalog = seeded_catalog();
    for bad in ["popularity=foo:7", "popularity=gt:abc", "imdb_score=eq:7", "imdb_score=7"] {
        let err = list(&catalog, bad).unwrap_err();
        assert!(matches!(err, QueryError::InvalidFilter { .. }), "{bad}: {err:?}");
    }

    assert!(list(&catalog, "popularity=gt:7").is_ok());
    assert!(list(&catalog, "imdb_score=lte:8.5").is_ok());
}

#[test]
fn test_sort_grammar() {
    let catalog = seeded_catalog();
    for bad in ["sort=rating", "sort=name,", "sort=--name", "sort=name;director", "sort=genre"] {
        let err = list(&catalog, bad).unwrap_err();
        assert!(matches!(err, QueryError::InvalidSort { .. }), "{bad}: {err:?}");
    }
}

#[test]
fn test_unknown_parameter_rejected() {
    let catalog = seeded_catalog();
    let err = list(&catalog, "genre=Drama").unwrap_err();
    assert_eq!(err, QueryError::UnknownField { field: "genre".to_string() });
}

#[test]
fn test_duplicate_filter_rejected() {
    let catalog = seeded_catalog();
    let err = list(&catalog, "popularity=gte:80&popularity=lte:85").unwrap_err();
    assert_eq!(err, QueryError::DuplicateFilter { field: "popularity".to_string() });
}

#[test]
fn test_bad_pagination_rejected() {
    let catalog = seeded_catalog();
    assert!(matches!(
        list(&catalog, "limit=-1"),
        Err(QueryError::InvalidPagination { .. })
    ));
    assert!(matches!(
        list(&catalog, "skip=abc"),
        Err(QueryError::InvalidPagination { .. })
    ));
}

// =============================================================================
// Genre Tests
// =============================================================================

/// Labels are trimmed and shared across movies.
#[test]
fn test_genres_trimmed_and_shared() {
    let catalog = seeded_catalog();
    let cabiria = catalog.get(1).unwrap();
    let labels: Vec<&str> = cabiria.genre.iter().map(|g| g.label()).collect();
    assert_eq!(labels, vec!["Adventure", "Drama", "War"]);

    let genres = catalog.genres().unwrap();
    let drama = genres.iter().filter(|g| g.label() == "Drama").count();
    assert_eq!(drama, 1);
    assert_eq!(genres.len(), 10);
}
