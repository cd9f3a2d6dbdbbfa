//! Card link repository trait definition.
//!
//! The project-tracker connector is treated as a provider of an opaque
//! list of cards per test. This port only reads and writes that cache.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::CardLink;

#[async_trait]
pub trait CardLinkRepository: Send + Sync {
    /// Cards linked to a test, ordered by card id.
    async fn list_for_test(&self, test_id: &str) -> Result<Vec<CardLink>, RepositoryError>;

    /// Insert or refresh a cached card keyed on (`test_id`, `card_id`).
    async fn upsert(&self, link: &CardLink) -> Result<CardLink, RepositoryError>;

    /// Remove a cached card.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such link exists.
    async fn remove(&self, test_id: &str, card_id: &str) -> Result<(), RepositoryError>;
}
