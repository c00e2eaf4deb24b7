//! # Catalog Storage
//!
//! Repository abstraction over movies and genres, with an in-memory
//! implementation. Movie ids are assigned by the store; listing order is
//! ascending id (insertion order).

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use super::errors::{CatalogError, CatalogResult};
use super::model::{Genre, Movie, MovieInput};

/// Movie and genre storage
pub trait MovieRepository: Send + Sync {
    /// Snapshot of every movie in natural order
    fn find_all(&self) -> CatalogResult<Vec<Movie>>;

    fn get_by_id(&self, id: u64) -> CatalogResult<Option<Movie>>;

    /// Store a new movie; every genre must already exist
    fn insert(&self, input: &MovieInput, genres: Vec<Genre>) -> CatalogResult<Movie>;

    /// Replace an existing movie's fields and genres
    fn replace(&self, id: u64, input: &MovieInput, genres: Vec<Genre>) -> CatalogResult<Movie>;

    fn delete(&self, id: u64) -> CatalogResult<()>;

    /// Get-or-create a genre by label. Idempotent.
    fn upsert_genre(&self, genre: &Genre) -> CatalogResult<Genre>;

    /// All known genres, sorted by label
    fn genres(&self) -> CatalogResult<Vec<Genre>>;
}

#[derive(Debug, Default)]
struct CatalogTables {
    next_id: u64,
    movies: BTreeMap<u64, Movie>,
    genres: BTreeSet<String>,
}

impl CatalogTables {
    fn check_genres(&self, genres: &[Genre]) -> CatalogResult<()> {
        match genres.iter().find(|g| !self.genres.contains(&g.genre)) {
            Some(missing) => Err(CatalogError::Storage(format!(
                "unknown genre: {}",
                missing.genre
            ))),
            None => Ok(()),
        }
    }
}

/// In-memory catalog store
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    tables: RwLock<CatalogTables>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> CatalogError {
    CatalogError::Storage("Lock poisoned".to_string())
}

fn build_movie(id: u64, input: &MovieInput, genres: Vec<Genre>) -> Movie {
    Movie {
        movie_id: id,
        name: input.name.clone(),
        director: input.director.clone(),
        popularity: input.popularity,
        imdb_score: input.imdb_score,
        genre: genres,
    }
}

impl MovieRepository for InMemoryCatalog {
    fn find_all(&self) -> CatalogResult<Vec<Movie>> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.movies.values().cloned().collect())
    }

    fn get_by_id(&self, id: u64) -> CatalogResult<Option<Movie>> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.movies.get(&id).cloned())
    }

    fn insert(&self, input: &MovieInput, genres: Vec<Genre>) -> CatalogResult<Movie> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        tables.check_genres(&genres)?;

        tables.next_id += 1;
        let movie = build_movie(tables.next_id, input, genres);
        tables.movies.insert(movie.movie_id, movie.clone());
        Ok(movie)
    }

    fn replace(&self, id: u64, input: &MovieInput, genres: Vec<Genre>) -> CatalogResult<Movie> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        tables.check_genres(&genres)?;

        let slot = tables
            .movies
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;
        *slot = build_movie(id, input, genres);
        Ok(slot.clone())
    }

    fn delete(&self, id: u64) -> CatalogResult<()> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        tables
            .movies
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound(id))
    }

    fn upsert_genre(&self, genre: &Genre) -> CatalogResult<Genre> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        tables.genres.insert(genre.genre.clone());
        Ok(genre.clone())
    }

    fn genres(&self) -> CatalogResult<Vec<Genre>> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables
            .genres
            .iter()
            .map(|label| Genre {
                genre: label.clone(),
            })
            .collect())
    }
}
