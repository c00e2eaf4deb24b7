//! # Auth Provider
//!
//! The capability the rest of the service uses for credentials: digest
//! passwords, check them, and issue/verify bearer tokens.

use super::crypto::{hash_password, verify_password};
use super::errors::AuthResult;
use super::jwt::{JwtConfig, JwtManager};

/// Password digest and bearer token operations
pub trait AuthProvider: Send + Sync {
    /// Digest a plaintext password
    fn hash(&self, password: &str) -> AuthResult<String>;

    /// Check a plaintext password against a digest
    fn verify(&self, password: &str, digest: &str) -> bool;

    /// Issue a bearer token for a subject
    fn issue_token(&self, subject: &str) -> AuthResult<String>;

    /// Verify a bearer token and return its subject
    fn verify_token(&self, token: &str) -> AuthResult<String>;

    /// Lifetime of issued tokens, in seconds
    fn token_ttl_seconds(&self) -> i64;
}

/// Argon2id digests plus HS256 JWTs
#[derive(Debug, Clone)]
pub struct TokenAuthority {
    jwt: JwtManager,
}

impl TokenAuthority {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            jwt: JwtManager::new(config),
        }
    }
}

impl Default for TokenAuthority {
    fn default() -> Self {
        Self::new(JwtConfig::default())
    }
}

impl AuthProvider for TokenAuthority {
    fn hash(&self, password: &str) -> AuthResult<String> {
        hash_password(password)
    }

    fn verify(&self, password: &str, digest: &str) -> bool {
        verify_password(password, digest)
    }

    fn issue_token(&self, subject: &str) -> AuthResult<String> {
        self.jwt.generate_access_token(subject)
    }

    fn verify_token(&self, token: &str) -> AuthResult<String> {
        self.jwt.validate_token(token).map(|claims| claims.sub)
    }

    fn token_ttl_seconds(&self) -> i64 {
        self.jwt.ttl_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthError;

    #[test]
    fn test_token_subject_round_trip() {
        let provider = TokenAuthority::default();
        let token = provider.issue_token("admin@example.com").unwrap();
        assert_eq!(provider.verify_token(&token).unwrap(), "admin@example.com");
        assert_eq!(provider.token_ttl_seconds(), 30 * 60);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let provider = TokenAuthority::default();
        assert!(matches!(
            provider.verify_token("garbage"),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_hash_then_verify() {
        let provider = TokenAuthority::default();
        let digest = provider.hash("hunter2").unwrap();
        assert!(provider.verify("hunter2", &digest));
        assert!(!provider.verify("hunter3", &digest));
    }
}
