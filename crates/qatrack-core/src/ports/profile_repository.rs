//! Profile repository trait definition.
//!
//! This port is the identity/profile store contract: it resolves a user
//! identifier to a role and display name. It never checks credentials.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewUser, User};

/// Repository for user profiles.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Roles are written only by `insert` (provisioning); no update path
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// List all profiles, ordered by display name.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Get a profile by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no profile exists.
    async fn get(&self, id: &str) -> Result<User, RepositoryError>;

    /// Provision a new profile.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the id is taken.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
}
