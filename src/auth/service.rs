//! # Auth Services
//!
//! Login and bearer-token authentication ([`AuthService`]), and the
//! admin-gated account management operations ([`UserService`]).

use std::sync::Arc;

use crate::observability::Logger;

use super::crypto::UNKNOWN_USER_DIGEST;
use super::errors::{AuthError, AuthResult};
use super::jwt::TokenResponse;
use super::provider::AuthProvider;
use super::user::{CreateUserRequest, UpdateUserRequest, User, UserRepository};

/// Fails with `Forbidden` unless the actor is an admin
pub fn require_admin(actor: &User) -> AuthResult<()> {
    if actor.is_admin {
        Ok(())
    } else {
        Logger::warn("OPERATION_FORBIDDEN", &[("username", actor.username.as_str())]);
        Err(AuthError::Forbidden)
    }
}

/// Credential checks and token issuance
pub struct AuthService<U: UserRepository, P: AuthProvider> {
    users: Arc<U>,
    provider: Arc<P>,
}

impl<U: UserRepository, P: AuthProvider> Clone for AuthService<U, P> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<U: UserRepository, P: AuthProvider> AuthService<U, P> {
    pub fn new(users: Arc<U>, provider: Arc<P>) -> Self {
        Self { users, provider }
    }

    /// Exchange a username/password for a bearer token
    pub fn login(&self, username: &str, password: &str) -> AuthResult<TokenResponse> {
        let found = self.users.find(username)?;
        let digest = found
            .as_ref()
            .map_or(UNKNOWN_USER_DIGEST, |user| user.password_hash.as_str());
        let verified = self.provider.verify(password, digest);

        let user = match found {
            Some(user) if verified => user,
            _ => {
                Logger::warn("LOGIN_FAILED", &[("username", username)]);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.provider.issue_token(&user.username)?;
        Logger::info("LOGIN_SUCCEEDED", &[("username", user.username.as_str())]);

        Ok(TokenResponse::bearer(token, self.provider.token_ttl_seconds()))
    }

    /// Resolve a bearer token to the user it names
    pub fn authenticate(&self, token: &str) -> AuthResult<User> {
        let subject = self.provider.verify_token(token)?;
        self.users.find(&subject)?.ok_or(AuthError::UnknownSubject)
    }

    /// Create the initial admin account if it does not exist yet.
    ///
    /// Returns `true` when an account was created.
    pub fn bootstrap_admin(&self, username: &str, password: &str) -> AuthResult<bool> {
        if self.users.find(username)?.is_some() {
            return Ok(false);
        }

        let digest = self.provider.hash(password)?;
        self.users.create(&User::new(username, digest, true))?;
        Logger::info("ADMIN_BOOTSTRAPPED", &[("username", username)]);
        Ok(true)
    }
}

/// Account management; every mutation requires an admin actor
pub struct UserService<U: UserRepository, P: AuthProvider> {
    users: Arc<U>,
    provider: Arc<P>,
}

impl<U: UserRepository, P: AuthProvider> Clone for UserService<U, P> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<U: UserRepository, P: AuthProvider> UserService<U, P> {
    pub fn new(users: Arc<U>, provider: Arc<P>) -> Self {
        Self { users, provider }
    }

    pub fn get(&self, username: &str) -> AuthResult<User> {
        self.users
            .find(username)?
            .ok_or_else(|| AuthError::UserNotFound(username.to_string()))
    }

    pub fn list(&self, skip: usize, limit: usize) -> AuthResult<Vec<User>> {
        self.users.list(skip, limit)
    }

    pub fn create(&self, actor: &User, request: CreateUserRequest) -> AuthResult<User> {
        require_admin(actor)?;

        if self.users.find(&request.username)?.is_some() {
            return Err(AuthError::UserAlreadyExists(request.username));
        }

        let digest = self.provider.hash(&request.password)?;
        let user = User::new(request.username, digest, request.is_admin);
        self.users.create(&user)?;

        Logger::info(
            "USER_CREATED",
            &[("actor", actor.username.as_str()), ("username", user.username.as_str())],
        );
        Ok(user)
    }

    pub fn update(
        &self,
        actor: &User,
        username: &str,
        request: UpdateUserRequest,
    ) -> AuthResult<User> {
        require_admin(actor)?;

        let mut user = self.get(username)?;
        user.password_hash = self.provider.hash(&request.password)?;
        user.is_admin = request.is_admin;
        self.users.update(&user)?;

        Logger::info(
            "USER_UPDATED",
            &[("actor", actor.username.as_str()), ("username", username)],
        );
        Ok(user)
    }

    pub fn delete(&self, actor: &User, username: &str) -> AuthResult<()> {
        require_admin(actor)?;
        self.users.delete(username)?;

        Logger::info(
            "USER_DELETED",
            &[("actor", actor.username.as_str()), ("username", username)],
        );
        Ok(())
    }
}
