//! # User Accounts
//!
//! User model and repository. Users are keyed by username; the password is
//! held only as an Argon2id digest.

use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};

/// User model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique username (conventionally an email address)
    pub username: String,

    /// Password digest (never plaintext)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Admins may mutate movies and users
    pub is_admin: bool,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: String, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            password_hash,
            is_admin,
        }
    }
}

/// User creation request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// User update request (replaces password and admin flag)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// User repository trait
///
/// Abstracts storage operations for users.
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    fn find(&self, username: &str) -> AuthResult<Option<User>>;

    /// Create a new user
    fn create(&self, user: &User) -> AuthResult<()>;

    /// Replace an existing user
    fn update(&self, user: &User) -> AuthResult<()>;

    /// Delete a user
    fn delete(&self, username: &str) -> AuthResult<()>;

    /// Users in creation order, paged
    fn list(&self, skip: usize, limit: usize) -> AuthResult<Vec<User>>;
}

/// In-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: std::sync::RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AuthError {
    AuthError::StorageError("Lock poisoned".to_string())
}

impl UserRepository for InMemoryUserRepository {
    fn find(&self, username: &str) -> AuthResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(AuthError::UserAlreadyExists(user.username.clone()));
        }

        users.push(user.clone());
        Ok(())
    }

    fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;

        match users.iter_mut().find(|u| u.username == user.username) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(AuthError::UserNotFound(user.username.clone())),
        }
    }

    fn delete(&self, username: &str) -> AuthResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;

        let len_before = users.len();
        users.retain(|u| u.username != username);

        if users.len() == len_before {
            Err(AuthError::UserNotFound(username.to_string()))
        } else {
            Ok(())
        }
    }

    fn list(&self, skip: usize, limit: usize) -> AuthResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().skip(skip).take(limit).cloned().collect())
    }
}
