//! # API Errors
//!
//! One error type for every handler, mapping module errors onto HTTP
//! statuses: validation 422, not found 404, forbidden 403,
//! unauthenticated 401, conflict 400.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::catalog::CatalogError;
use crate::observability::Logger;
use crate::query::QueryError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Query or path parameter failed validation
    #[error(transparent)]
    Validation(#[from] QueryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Path segment is not a valid movie id
    #[error("Invalid movie id: {0:?}")]
    InvalidId(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            ApiError::Validation(_) | ApiError::InvalidId(_) => 422,
            ApiError::Catalog(e) => e.status_code(),
            ApiError::Auth(e) => e.status_code(),
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,

    /// Offending parameter, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,

    /// Grammar the parameter must follow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let (param, expected) = match err {
            ApiError::Validation(e) => (
                Some(e.param().to_string()),
                e.expected().map(str::to_string),
            ),
            ApiError::InvalidId(_) => (Some("movie_id".to_string()), Some("integer".to_string())),
            _ => (None, None),
        };

        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            param,
            expected,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(&self);

        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &[("error", body.error.as_str())]);
        } else if let ApiError::Validation(_) = self {
            Logger::warn(
                "QUERY_REJECTED",
                &[
                    ("error", body.error.as_str()),
                    ("param", body.param.as_deref().unwrap_or("")),
                ],
            );
        }

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}
