//! Disable flag gate - admin-only changes to a test's `disabled` flag.
//!
//! Callers must present an [`AdminCaller`], so the role guard has already
//! run. The store update re-checks the role inside the same statement, which
//! closes the window where an admin is demoted between the guard and the
//! write.

use std::sync::Arc;

use super::Deadline;
use crate::domain::{AdminCaller, TestCase};
use crate::ports::{CoreError, TestCaseRepository};
use crate::utils::validation::require_id;

#[derive(Clone)]
pub struct DisableFlagGate {
    tests: Arc<dyn TestCaseRepository>,
    deadline: Deadline,
}

impl DisableFlagGate {
    pub fn new(tests: Arc<dyn TestCaseRepository>, deadline: Deadline) -> Self {
        Self { tests, deadline }
    }

    /// Flip the flag. Existing assignments are left in place.
    pub async fn toggle(
        &self,
        test_id: &str,
        admin: AdminCaller<'_>,
    ) -> Result<TestCase, CoreError> {
        let test_id = require_id("test_id", test_id)?;
        let updated = self
            .deadline
            .run("toggle_disabled", self.tests.toggle_disabled(test_id, admin.id()))
            .await?;
        self.finish(test_id, admin, updated).await
    }

    /// Set the flag to `disabled`. Re-applying the same value only refreshes
    /// `updated_at`, so retries are safe.
    pub async fn set(
        &self,
        test_id: &str,
        admin: AdminCaller<'_>,
        disabled: bool,
    ) -> Result<TestCase, CoreError> {
        let test_id = require_id("test_id", test_id)?;
        let updated = self
            .deadline
            .run(
                "set_disabled",
                self.tests.set_disabled(test_id, admin.id(), disabled),
            )
            .await?;
        self.finish(test_id, admin, updated).await
    }

    async fn finish(
        &self,
        test_id: &str,
        admin: AdminCaller<'_>,
        updated: Option<TestCase>,
    ) -> Result<TestCase, CoreError> {
        if let Some(test) = updated {
            tracing::info!(
                target: "qatrack.gate",
                test_id,
                admin_id = admin.id(),
                disabled = test.disabled,
                "disabled flag changed"
            );
            return Ok(test);
        }

        // NotFound propagates from here; an existing test means the role check
        // inside the update failed.
        self.deadline.run("get_test", self.tests.get(test_id)).await?;
        tracing::warn!(target: "qatrack.gate", test_id, admin_id = admin.id(), "admin role revoked mid-request");
        Err(CoreError::Forbidden(format!(
            "user '{}' is no longer an admin",
            admin.id()
        )))
    }
}
