//! Test case repository trait definition.
//!
//! Besides plain reads, this port carries the conditional updates that
//! guard assignment exclusivity and the disabled flag. Each of those must be
//! a single atomic statement at the store; a read-then-write pair would let
//! two testers both observe "unassigned" and both claim the same test.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewTestCase, TestCase};

/// Repository for test cases.
///
/// Conditional updates return `Ok(None)` when their condition did not hold
/// (including when the test does not exist). The caller decides which
/// error kind to report.
#[async_trait]
pub trait TestCaseRepository: Send + Sync {
    /// List all test cases, ordered by id.
    async fn list(&self) -> Result<Vec<TestCase>, RepositoryError>;

    /// Get a test case by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn get(&self, id: &str) -> Result<TestCase, RepositoryError>;

    /// Insert a new test case (enabled, unassigned).
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if the id is taken.
    async fn insert(&self, test: &NewTestCase) -> Result<TestCase, RepositoryError>;

    /// Set `assigned_to = user_id` iff the test exists, is enabled and
    /// currently has no holder.
    async fn claim(&self, test_id: &str, user_id: &str)
    -> Result<Option<TestCase>, RepositoryError>;

    /// Clear `assigned_to` iff it currently equals `user_id`.
    async fn release(
        &self,
        test_id: &str,
        user_id: &str,
    ) -> Result<Option<TestCase>, RepositoryError>;

    /// Flip `disabled` iff the test exists and `admin_id` still resolves to
    /// an admin profile at the time of the update.
    async fn toggle_disabled(
        &self,
        test_id: &str,
        admin_id: &str,
    ) -> Result<Option<TestCase>, RepositoryError>;

    /// Set `disabled` to `disabled`, under the same conditions as
    /// [`toggle_disabled`](Self::toggle_disabled).
    async fn set_disabled(
        &self,
        test_id: &str,
        admin_id: &str,
        disabled: bool,
    ) -> Result<Option<TestCase>, RepositoryError>;
}
