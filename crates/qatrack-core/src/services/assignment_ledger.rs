//! Assignment ledger - claims and releases of test cases.
//!
//! Both operations are one conditional update at the store. When the update
//! matches nothing, a follow-up read names the reason. That read can observe
//! a later state than the one the update saw, but it never changes the
//! outcome: the mutation already did not happen.

use std::sync::Arc;

use super::Deadline;
use crate::domain::TestCase;
use crate::ports::{CoreError, TestCaseRepository};
use crate::utils::validation::require_id;

#[derive(Clone)]
pub struct AssignmentLedger {
    tests: Arc<dyn TestCaseRepository>,
    deadline: Deadline,
}

impl AssignmentLedger {
    pub fn new(tests: Arc<dyn TestCaseRepository>, deadline: Deadline) -> Self {
        Self { tests, deadline }
    }

    /// Claim `test_id` for `user_id`.
    ///
    /// Succeeds only if the test exists, is enabled and has no assignee.
    /// A claim by the current holder is reported as `AlreadyAssigned`.
    pub async fn assign(&self, test_id: &str, user_id: &str) -> Result<TestCase, CoreError> {
        let test_id = require_id("test_id", test_id)?;
        let user_id = require_id("user_id", user_id)?;

        if let Some(test) = self
            .deadline
            .run("claim_test", self.tests.claim(test_id, user_id))
            .await?
        {
            tracing::info!(target: "qatrack.ledger", test_id, user_id, "test assigned");
            return Ok(test);
        }

        let current = self.deadline.run("get_test", self.tests.get(test_id)).await?;
        let err = if current.disabled {
            CoreError::Disabled(format!("test '{test_id}' is disabled"))
        } else if let Some(holder) = current.assigned_to.as_deref() {
            if holder == user_id {
                CoreError::AlreadyAssigned(format!("test '{test_id}' is already assigned to you"))
            } else {
                CoreError::AlreadyAssigned(format!(
                    "test '{test_id}' is already assigned to another user"
                ))
            }
        } else {
            // Released between the claim and the read; the claim still lost.
            CoreError::AlreadyAssigned(format!("test '{test_id}' was claimed concurrently"))
        };
        tracing::debug!(target: "qatrack.ledger", test_id, user_id, kind = err.kind(), "claim rejected");
        Err(err)
    }

    /// Release `test_id`. Only the current holder may release.
    pub async fn unassign(&self, test_id: &str, user_id: &str) -> Result<TestCase, CoreError> {
        let test_id = require_id("test_id", test_id)?;
        let user_id = require_id("user_id", user_id)?;

        if let Some(test) = self
            .deadline
            .run("release_test", self.tests.release(test_id, user_id))
            .await?
        {
            tracing::info!(target: "qatrack.ledger", test_id, user_id, "test unassigned");
            return Ok(test);
        }

        // Existence check only; any existing test not held by the caller is NotOwner.
        self.deadline.run("get_test", self.tests.get(test_id)).await?;
        tracing::debug!(target: "qatrack.ledger", test_id, user_id, "release rejected");
        Err(CoreError::NotOwner(format!(
            "test '{test_id}' is not assigned to '{user_id}'"
        )))
    }
}
