//! # Catalog Model
//!
//! Movies and the shared genre labels attached to them.

use serde::{Deserialize, Serialize};

use super::errors::{CatalogError, CatalogResult};

/// A genre label; shared by every movie that carries it
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub genre: String,
}

impl Genre {
    /// Normalize a raw label. Blank labels are rejected.
    pub fn from_label(label: &str) -> CatalogResult<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidInput(
                "genre labels must not be blank".to_string(),
            ));
        }
        Ok(Self {
            genre: trimmed.to_string(),
        })
    }

    pub fn label(&self) -> &str {
        &self.genre
    }
}

/// A stored movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: u64,
    pub name: String,
    pub director: String,
    pub popularity: f64,
    pub imdb_score: f64,
    pub genre: Vec<Genre>,
}

/// Movie body for create and full-replacement update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    pub name: String,
    pub director: String,
    pub popularity: f64,
    pub imdb_score: f64,
    #[serde(default)]
    pub genre: Vec<String>,
}

impl MovieInput {
    /// Check scalar fields and normalize genre labels.
    ///
    /// Labels are trimmed; repeats collapse onto their first occurrence.
    pub fn normalized_genres(&self) -> CatalogResult<Vec<Genre>> {
        if !self.popularity.is_finite() || !self.imdb_score.is_finite() {
            return Err(CatalogError::InvalidInput(
                "popularity and imdb_score must be finite numbers".to_string(),
            ));
        }

        let mut genres: Vec<Genre> = Vec::with_capacity(self.genre.len());
        for label in &self.genre {
            let genre = Genre::from_label(label)?;
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }
        Ok(genres)
    }
}
