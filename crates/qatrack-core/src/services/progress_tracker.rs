//! Progress tracker - per-(user, test) completion records.

use std::sync::Arc;

use super::Deadline;
use crate::domain::{Progress, ProgressSummary, ProgressUpdate};
use crate::ports::{CoreError, ProfileRepository, ProgressRepository, TestCaseRepository};
use crate::utils::validation::{require_id, validate_progress_update};

#[derive(Clone)]
pub struct ProgressTracker {
    profiles: Arc<dyn ProfileRepository>,
    tests: Arc<dyn TestCaseRepository>,
    progress: Arc<dyn ProgressRepository>,
    deadline: Deadline,
}

impl ProgressTracker {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        tests: Arc<dyn TestCaseRepository>,
        progress: Arc<dyn ProgressRepository>,
        deadline: Deadline,
    ) -> Self {
        Self {
            profiles,
            tests,
            progress,
            deadline,
        }
    }

    /// Create or update the record for (`user_id`, `test_id`).
    ///
    /// Both must exist. Repeating the same input leaves every field except
    /// `updated_at` unchanged.
    pub async fn upsert(&self, update: &ProgressUpdate) -> Result<Progress, CoreError> {
        let update = validate_progress_update(update)?;

        let record = self
            .deadline
            .bound("record_progress", async {
                self.deadline
                    .run("get_user", self.profiles.get(&update.user_id))
                    .await?;
                self.deadline
                    .run("get_test", self.tests.get(&update.test_id))
                    .await?;
                self.deadline
                    .run("upsert_progress", self.progress.upsert(&update))
                    .await
            })
            .await?;
        tracing::debug!(
            target: "qatrack.ledger",
            user_id = %record.user_id,
            test_id = %record.test_id,
            completed = record.completed,
            "progress recorded"
        );
        Ok(record)
    }

    /// Every record, most recently updated first.
    pub async fn list(&self) -> Result<Vec<Progress>, CoreError> {
        let records = self.deadline.run("list_progress", self.progress.list()).await?;
        Ok(newest_first(records))
    }

    /// One user's records, most recently updated first.
    pub async fn list_for(&self, user_id: &str) -> Result<Vec<Progress>, CoreError> {
        let user_id = require_id("user_id", user_id)?;
        let records = self
            .deadline
            .bound("list_user_progress", async {
                self.deadline.run("get_user", self.profiles.get(user_id)).await?;
                self.deadline
                    .run("list_progress", self.progress.list_for_user(user_id))
                    .await
            })
            .await?;
        Ok(newest_first(records))
    }

    /// Completed count over enabled tests for `user_id`.
    ///
    /// Records on disabled tests are ignored on both sides of the ratio.
    pub async fn summary_for(&self, user_id: &str) -> Result<ProgressSummary, CoreError> {
        let (records, tests) = self
            .deadline
            .bound("progress_summary", async {
                let records = self.list_for(user_id).await?;
                let tests = self.deadline.run("list_tests", self.tests.list()).await?;
                Ok((records, tests))
            })
            .await?;

        let enabled: Vec<&str> = tests
            .iter()
            .filter(|t| !t.disabled)
            .map(|t| t.id.as_str())
            .collect();
        let completed = records
            .iter()
            .filter(|p| p.completed && enabled.contains(&p.test_id.as_str()))
            .count();

        Ok(ProgressSummary::new(user_id.trim(), completed, enabled.len()))
    }
}

/// Sort by `updated_at` descending regardless of what order the store used.
/// Ties keep a stable order by (user, test).
fn newest_first(mut records: Vec<Progress>) -> Vec<Progress> {
    records.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| a.user_id.cmp(&b.user_id))
            .then_with(|| a.test_id.cmp(&b.test_id))
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::services::test_support::MemoryStore;
    use chrono::{Duration, Utc};

    fn tracker() -> (MemoryStore, ProgressTracker) {
        let store = MemoryStore::new();
        store
            .add_user("u1", Role::Tester)
            .add_user("u2", Role::Tester)
            .add_test("T1")
            .add_test("T2")
            .add_test("T3");
        let repos = store.repos();
        let tracker = ProgressTracker::new(
            repos.profiles,
            repos.tests,
            repos.progress,
            Deadline::default(),
        );
        (store, tracker)
    }

    fn update(user: &str, test: &str, completed: bool) -> ProgressUpdate {
        ProgressUpdate {
            user_id: user.to_string(),
            test_id: test.to_string(),
            completed,
            notes: "checked on staging".to_string(),
        }
    }

    #[test]
    fn newest_first_sorts_any_input_order() {
        let base = Utc::now();
        let rec = |test: &str, offset: i64| Progress {
            user_id: "u1".to_string(),
            test_id: test.to_string(),
            completed: false,
            notes: String::new(),
            updated_at: base + Duration::seconds(offset),
        };
        let sorted = newest_first(vec![rec("A", 1), rec("B", 3), rec("C", 2)]);
        let ids: Vec<&str> = sorted.iter().map(|p| p.test_id.as_str()).collect();
        assert_eq!(ids, ["B", "C", "A"]);
    }

    #[tokio::test]
    async fn repeated_upsert_only_moves_updated_at() {
        let (_store, tracker) = tracker();
        let first = tracker.upsert(&update("u1", "T1", true)).await.unwrap();
        let second = tracker.upsert(&update("u1", "T1", true)).await.unwrap();

        assert_eq!(first.completed, second.completed);
        assert_eq!(first.notes, second.notes);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(tracker.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (_store, tracker) = tracker();
        tracker.upsert(&update("u1", "T1", false)).await.unwrap();
        tracker.upsert(&update("u2", "T2", false)).await.unwrap();
        tracker.upsert(&update("u1", "T1", true)).await.unwrap();

        let list = tracker.list().await.unwrap();
        assert_eq!(list[0].test_id, "T1");
        assert!(list[0].completed);
        assert!(list.windows(2).all(|w| w[0].updated_at >= w[1].updated_at));
    }

    #[tokio::test]
    async fn unknown_user_or_test_is_not_found() {
        let (_store, tracker) = tracker();
        assert!(matches!(
            tracker.upsert(&update("ghost", "T1", true)).await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            tracker.upsert(&update("u1", "T404", true)).await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn summary_ignores_disabled_tests() {
        let (store, tracker) = tracker();
        tracker.upsert(&update("u1", "T1", true)).await.unwrap();
        tracker.upsert(&update("u1", "T2", true)).await.unwrap();
        store.set_flag("T2", true);

        let summary = tracker.summary_for("u1").await.unwrap();
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.total, 2);
        assert!((summary.percent - 50.0).abs() < f64::EPSILON);
    }
}
