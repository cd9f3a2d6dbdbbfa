//! Progress repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Progress, ProgressUpdate};

/// Repository for per-(user, test) progress records.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Insert or update the record keyed on (`user_id`, `test_id`) in one
    /// statement, refreshing `updated_at`. `updated_at` must never move
    /// backwards for an existing record.
    async fn upsert(&self, update: &ProgressUpdate) -> Result<Progress, RepositoryError>;

    /// All records, most recently updated first.
    async fn list(&self) -> Result<Vec<Progress>, RepositoryError>;

    /// One user's records, most recently updated first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Progress>, RepositoryError>;
}
