//! Access gate - the single entry point for caller-scoped operations.
//!
//! Every operation follows the same shape: resolve the caller, run the
//! guard clauses (role first, then existence), then issue exactly one atomic
//! store mutation. The whole operation runs under one deadline, so a slow
//! store cannot stretch it past a single backend timeout. Adapters call the gate; they never reach the ledger or
//! flag gate directly for caller-driven writes.

use super::{
    AssignmentLedger, Deadline, DisableFlagGate, ProgressTracker, RoleResolver, TestCatalog,
};
use crate::domain::{Caller, NewTestCase, Progress, ProgressUpdate, TestCase};
use crate::ports::CoreError;

#[derive(Clone)]
pub struct AccessGate {
    roles: RoleResolver,
    ledger: AssignmentLedger,
    flags: DisableFlagGate,
    progress: ProgressTracker,
    catalog: TestCatalog,
    deadline: Deadline,
}

impl AccessGate {
    pub const fn new(
        roles: RoleResolver,
        ledger: AssignmentLedger,
        flags: DisableFlagGate,
        progress: ProgressTracker,
        catalog: TestCatalog,
        deadline: Deadline,
    ) -> Self {
        Self {
            roles,
            ledger,
            flags,
            progress,
            catalog,
            deadline,
        }
    }

    /// Resolve the identity behind a request (`NotFound` for unknown ids).
    pub async fn caller(&self, caller_id: &str) -> Result<Caller, CoreError> {
        self.roles.caller(caller_id).await
    }

    /// Claim a test for the caller.
    pub async fn assign_test(&self, caller_id: &str, test_id: &str) -> Result<TestCase, CoreError> {
        self.deadline
            .bound("assign_test", async {
                let caller = self.caller(caller_id).await?;
                self.ledger.assign(test_id, caller.id()).await
            })
            .await
    }

    /// Release a test held by the caller.
    pub async fn unassign_test(
        &self,
        caller_id: &str,
        test_id: &str,
    ) -> Result<TestCase, CoreError> {
        self.deadline
            .bound("unassign_test", async {
                let caller = self.caller(caller_id).await?;
                self.ledger.unassign(test_id, caller.id()).await
            })
            .await
    }

    /// Flip a test's disabled flag. Admin only; the role check runs before
    /// any lookup of the test, so testers learn nothing about test ids.
    pub async fn toggle_disabled(
        &self,
        caller_id: &str,
        test_id: &str,
    ) -> Result<TestCase, CoreError> {
        self.deadline
            .bound("toggle_disabled", async {
                let caller = self.caller(caller_id).await?;
                let admin = caller.require_admin()?;
                self.flags.toggle(test_id, admin).await
            })
            .await
    }

    /// Set a test's disabled flag to an explicit value. Admin only.
    pub async fn set_disabled(
        &self,
        caller_id: &str,
        test_id: &str,
        disabled: bool,
    ) -> Result<TestCase, CoreError> {
        self.deadline
            .bound("set_disabled", async {
                let caller = self.caller(caller_id).await?;
                let admin = caller.require_admin()?;
                self.flags.set(test_id, admin, disabled).await
            })
            .await
    }

    /// Record the caller's own progress on a test.
    pub async fn upsert_progress(
        &self,
        caller_id: &str,
        test_id: &str,
        completed: bool,
        notes: &str,
    ) -> Result<Progress, CoreError> {
        self.deadline
            .bound("upsert_progress", async {
                let caller = self.caller(caller_id).await?;
                self.progress
                    .upsert(&ProgressUpdate {
                        user_id: caller.id().to_string(),
                        test_id: test_id.to_string(),
                        completed,
                        notes: notes.to_string(),
                    })
                    .await
            })
            .await
    }

    /// Add a test case. Admin only.
    pub async fn create_test(
        &self,
        caller_id: &str,
        test: &NewTestCase,
    ) -> Result<TestCase, CoreError> {
        self.deadline
            .bound("create_test", async {
                let caller = self.caller(caller_id).await?;
                let admin = caller.require_admin()?;
                self.catalog.create(admin, test).await
            })
            .await
    }
}
