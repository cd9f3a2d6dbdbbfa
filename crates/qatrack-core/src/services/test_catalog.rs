//! Test catalog - reads and admin-only creation of test cases.

use std::sync::Arc;

use super::Deadline;
use crate::domain::{AdminCaller, NewTestCase, TestCase};
use crate::ports::{CoreError, TestCaseRepository};
use crate::utils::validation::{require_id, validate_new_test};

#[derive(Clone)]
pub struct TestCatalog {
    tests: Arc<dyn TestCaseRepository>,
    deadline: Deadline,
}

impl TestCatalog {
    pub fn new(tests: Arc<dyn TestCaseRepository>, deadline: Deadline) -> Self {
        Self { tests, deadline }
    }

    pub async fn list(&self) -> Result<Vec<TestCase>, CoreError> {
        self.deadline.run("list_tests", self.tests.list()).await
    }

    pub async fn get(&self, test_id: &str) -> Result<TestCase, CoreError> {
        let test_id = require_id("test_id", test_id)?;
        self.deadline.run("get_test", self.tests.get(test_id)).await
    }

    /// Add a test case. `Conflict` if the id already exists.
    pub async fn create(
        &self,
        admin: AdminCaller<'_>,
        test: &NewTestCase,
    ) -> Result<TestCase, CoreError> {
        let test = validate_new_test(test)?;
        let created = self
            .deadline
            .run("insert_test", self.tests.insert(&test))
            .await?;
        tracing::info!(target: "qatrack.gate", test_id = %created.id, admin_id = admin.id(), "test created");
        Ok(created)
    }
}
