//! # Auth Errors
//!
//! Error types for the authentication module.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication and authorization errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // ==================
    // Authentication Errors
    // ==================
    /// Unknown username or wrong password (generic - don't leak which)
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// No bearer token supplied
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Token decoded but its subject no longer exists
    #[error("Could not validate credentials")]
    UnknownSubject,

    // ==================
    // JWT Errors
    // ==================
    /// JWT token is malformed
    #[error("Invalid token")]
    MalformedToken,

    /// JWT token has expired
    #[error("Token expired")]
    TokenExpired,

    /// JWT signature is invalid
    #[error("Invalid token signature")]
    InvalidSignature,

    // ==================
    // Authorization / Account Errors
    // ==================
    /// Caller is not an admin
    #[error("Operation not permitted")]
    Forbidden,

    /// Username already taken
    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    /// No such user
    #[error("Resource not found")]
    UserNotFound(String),

    // ==================
    // Internal Errors
    // ==================
    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Token generation failed
    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            AuthError::UserAlreadyExists(_) => 400,

            // 401 Unauthorized
            AuthError::InvalidCredentials => 401,
            AuthError::AuthenticationRequired => 401,
            AuthError::UnknownSubject => 401,
            AuthError::MalformedToken => 401,
            AuthError::TokenExpired => 401,
            AuthError::InvalidSignature => 401,

            // 403 Forbidden
            AuthError::Forbidden => 403,

            // 404 Not Found
            AuthError::UserNotFound(_) => 404,

            // 500 Internal Server Error
            AuthError::HashingFailed => 500,
            AuthError::TokenGenerationFailed => 500,
            AuthError::StorageError(_) => 500,
        }
    }

    /// Whether the caller should be challenged for bearer credentials
    pub fn is_unauthenticated(&self) -> bool {
        self.status_code() == 401
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::TokenExpired.status_code(), 401);
        assert_eq!(AuthError::Forbidden.status_code(), 403);
        assert_eq!(AuthError::UserAlreadyExists("a".into()).status_code(), 400);
        assert_eq!(AuthError::UserNotFound("a".into()).status_code(), 404);
        assert_eq!(AuthError::HashingFailed.status_code(), 500);
    }

    #[test]
    fn test_error_messages_do_not_leak_info() {
        // InvalidCredentials must not reveal which half was wrong
        let msg = AuthError::InvalidCredentials.to_string();
        assert_eq!(msg, "Incorrect username or password");
        assert!(!AuthError::UserNotFound("alice@example.com".into())
            .to_string()
            .contains("alice"));
    }

    #[test]
    fn test_unauthenticated_classification() {
        assert!(AuthError::MalformedToken.is_unauthenticated());
        assert!(!AuthError::Forbidden.is_unauthenticated());
    }
}
