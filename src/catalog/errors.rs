//! # Catalog Errors

use thiserror::Error;

use crate::auth::AuthError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Unknown movie id
    #[error("Resource not found")]
    NotFound(u64),

    /// Movie body failed validation
    #[error("Invalid movie: {0}")]
    InvalidInput(String),

    /// Authorization failure (non-admin mutation)
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Seed file could not be read or parsed
    #[error("Import failed: {0}")]
    Import(String),

    /// Storage operation failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::NotFound(_) => 404,
            CatalogError::InvalidInput(_) => 422,
            CatalogError::Auth(e) => e.status_code(),
            CatalogError::Import(_) => 500,
            CatalogError::Storage(_) => 500,
        }
    }
}
