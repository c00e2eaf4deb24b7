//! # Auth Module
//!
//! User accounts, Argon2id password digests, JWT bearer tokens and the
//! admin-only authorization check guarding every mutating operation.

pub mod crypto;
pub mod errors;
pub mod jwt;
pub mod provider;
pub mod service;
pub mod user;

pub use errors::{AuthError, AuthResult};
pub use jwt::{JwtClaims, JwtConfig, JwtManager, TokenResponse};
pub use provider::{AuthProvider, TokenAuthority};
pub use service::{require_admin, AuthService, UserService};
pub use user::{CreateUserRequest, InMemoryUserRepository, UpdateUserRequest, User, UserRepository};
