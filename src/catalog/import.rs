//! # Catalog Seed Import
//!
//! Bulk-loads movies from the JSON seed format:
//!
//! ```json
//! [{"99popularity": 83.0, "director": "Victor Fleming", "genre": ["Adventure"],
//!   "imdb_score": 8.3, "name": "The Wizard of Oz"}]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::observability::Logger;

use super::errors::{CatalogError, CatalogResult};
use super::model::MovieInput;
use super::service::CatalogService;
use super::store::MovieRepository;

#[derive(Debug, Deserialize)]
struct SeedMovie {
    name: String,
    director: String,
    #[serde(rename = "99popularity")]
    popularity: f64,
    imdb_score: f64,
    #[serde(default)]
    genre: Vec<String>,
}

impl From<SeedMovie> for MovieInput {
    fn from(seed: SeedMovie) -> Self {
        Self {
            name: seed.name,
            director: seed.director,
            popularity: seed.popularity,
            imdb_score: seed.imdb_score,
            genre: seed.genre,
        }
    }
}

/// Import every movie in a seed document, in document order.
///
/// Returns the number of movies inserted.
pub fn import_movies<R: MovieRepository, S: Read>(
    catalog: &CatalogService<R>,
    source: S,
) -> CatalogResult<usize> {
    let seeds: Vec<SeedMovie> =
        serde_json::from_reader(source).map_err(|e| CatalogError::Import(e.to_string()))?;

    let total = seeds.len();
    for seed in seeds {
        let movie = catalog.insert(&MovieInput::from(seed))?;
        Logger::trace(
            "MOVIE_IMPORTED",
            &[
                ("movie_id", movie.movie_id.to_string().as_str()),
                ("name", movie.name.as_str()),
            ],
        );
    }

    Logger::info("CATALOG_IMPORTED", &[("movies", total.to_string().as_str())]);
    Ok(total)
}

/// Import a seed file from disk
pub fn import_file<R: MovieRepository>(
    catalog: &CatalogService<R>,
    path: &Path,
) -> CatalogResult<usize> {
    let file = File::open(path)
        .map_err(|e| CatalogError::Import(format!("{}: {}", path.display(), e)))?;
    import_movies(catalog, BufReader::new(file))
}
