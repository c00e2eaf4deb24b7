//! # Catalog Service
//!
//! Movie listing and CRUD. Reads are open; every mutation requires an
//! admin actor. Genre upserts happen only on create and update.

use std::sync::Arc;

use crate::auth::{require_admin, User};
use crate::observability::Logger;
use crate::query::MovieQuery;

use super::errors::{CatalogError, CatalogResult};
use super::model::{Genre, Movie, MovieInput};
use super::store::MovieRepository;

pub struct CatalogService<R: MovieRepository> {
    repo: Arc<R>,
}

impl<R: MovieRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: MovieRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Run a compiled listing query against the current catalog
    pub fn list(&self, query: &MovieQuery) -> CatalogResult<Vec<Movie>> {
        let snapshot = self.repo.find_all()?;
        let page = query.execute(&snapshot);

        Logger::trace(
            "MOVIE_QUERY",
            &[
                ("catalog_size", snapshot.len().to_string().as_str()),
                ("filters", query.filters.len().to_string().as_str()),
                ("limit", query.pagination.limit.to_string().as_str()),
                ("results", page.len().to_string().as_str()),
                ("skip", query.pagination.skip.to_string().as_str()),
                ("sorts", query.sorts.len().to_string().as_str()),
            ],
        );
        Ok(page)
    }

    pub fn get(&self, id: u64) -> CatalogResult<Movie> {
        self.repo.get_by_id(id)?.ok_or(CatalogError::NotFound(id))
    }

    pub fn create(&self, actor: &User, input: MovieInput) -> CatalogResult<Movie> {
        require_admin(actor)?;
        let movie = self.insert(&input)?;

        Logger::info(
            "MOVIE_CREATED",
            &[
                ("actor", actor.username.as_str()),
                ("movie_id", movie.movie_id.to_string().as_str()),
            ],
        );
        Ok(movie)
    }

    /// Replace every field of an existing movie
    pub fn update(&self, actor: &User, id: u64, input: MovieInput) -> CatalogResult<Movie> {
        require_admin(actor)?;

        // Unknown id must fail before any genre is created
        self.get(id)?;
        let genres = self.resolve_genres(&input)?;
        let movie = self.repo.replace(id, &input, genres)?;

        Logger::info(
            "MOVIE_UPDATED",
            &[
                ("actor", actor.username.as_str()),
                ("movie_id", id.to_string().as_str()),
            ],
        );
        Ok(movie)
    }

    pub fn delete(&self, actor: &User, id: u64) -> CatalogResult<()> {
        require_admin(actor)?;
        self.repo.delete(id)?;

        Logger::info(
            "MOVIE_DELETED",
            &[
                ("actor", actor.username.as_str()),
                ("movie_id", id.to_string().as_str()),
            ],
        );
        Ok(())
    }

    pub fn genres(&self) -> CatalogResult<Vec<Genre>> {
        self.repo.genres()
    }

    /// Insert without an actor check. Used by the seed importer.
    pub(crate) fn insert(&self, input: &MovieInput) -> CatalogResult<Movie> {
        let genres = self.resolve_genres(input)?;
        self.repo.insert(input, genres)
    }

    fn resolve_genres(&self, input: &MovieInput) -> CatalogResult<Vec<Genre>> {
        input
            .normalized_genres()?
            .iter()
            .map(|genre| self.repo.upsert_genre(genre))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthError;
    use crate::catalog::store::InMemoryCatalog;

    fn service() -> CatalogService<InMemoryCatalog> {
        CatalogService::new(Arc::new(InMemoryCatalog::new()))
    }

    fn admin() -> User {
        User::new("admin@example.com", String::new(), true)
    }

    fn member() -> User {
        User::new("member@example.com", String::new(), false)
    }

    fn input(name: &str, genres: &[&str]) -> MovieInput {
        MovieInput {
            name: name.to_string(),
            director: "Director".to_string(),
            popularity: 70.0,
            imdb_score: 7.0,
            genre: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_genres_trimmed_and_shared() {
        let catalog = service();
        let first = catalog
            .create(&admin(), input("One", &["Adventure", "Fiction "]))
            .unwrap();
        let labels: Vec<_> = first.genre.iter().map(|g| g.label()).collect();
        assert_eq!(labels, vec!["Adventure", "Fiction"]);

        catalog.create(&admin(), input("Two", &["Adventure"])).unwrap();

        // "Adventure" reused, not duplicated
        let all: Vec<_> = catalog
            .genres()
            .unwrap()
            .into_iter()
            .map(|g| g.genre)
            .collect();
        assert_eq!(all, vec!["Adventure", "Fiction"]);
    }

    #[test]
    fn test_member_cannot_mutate() {
        let catalog = service();
        let movie = catalog.create(&admin(), input("One", &[])).unwrap();

        for result in [
            catalog.create(&member(), input("Two", &[])).map(|_| ()),
            catalog
                .update(&member(), movie.movie_id, input("X", &[]))
                .map(|_| ()),
            catalog.delete(&member(), movie.movie_id),
        ] {
            assert!(matches!(
                result,
                Err(CatalogError::Auth(AuthError::Forbidden))
            ));
        }
    }

    #[test]
    fn test_update_unknown_movie_creates_no_genres() {
        let catalog = service();
        let result = catalog.update(&admin(), 99, input("X", &["Noir"]));
        assert!(matches!(result, Err(CatalogError::NotFound(99))));
        assert!(catalog.genres().unwrap().is_empty());
    }

    #[test]
    fn test_update_replaces_fields() {
        let catalog = service();
        let movie = catalog.create(&admin(), input("Old", &["Drama"])).unwrap();
        let updated = catalog
            .update(&admin(), movie.movie_id, input("New", &["Crime"]))
            .unwrap();

        assert_eq!(updated.name, "New");
        assert_eq!(catalog.get(movie.movie_id).unwrap(), updated);
        assert_eq!(updated.genre, vec![Genre::from_label("Crime").unwrap()]);
    }

    #[test]
    fn test_delete_then_get_not_found() {
        let catalog = service();
        let movie = catalog.create(&admin(), input("Gone", &[])).unwrap();
        catalog.delete(&admin(), movie.movie_id).unwrap();

        assert!(matches!(
            catalog.get(movie.movie_id),
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            catalog.delete(&admin(), movie.movie_id),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_runs_query() {
        let catalog = service();
        for (name, score) in [("A", 8.8), ("B", 9.2), ("C", 6.9)] {
            let mut movie = input(name, &[]);
            movie.imdb_score = score;
            catalog.create(&admin(), movie).unwrap();
        }

        let query = MovieQuery::from_params(&[("imdb_score".to_string(), "lt:7".to_string())])
            .unwrap();
        let result = catalog.list(&query).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "C");
    }
}
