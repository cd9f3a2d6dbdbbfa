//! `SQLite` implementation of the `TestCaseRepository` trait.
//!
//! The claim, release and flag methods are single `UPDATE ... RETURNING`
//! statements. SQLite serializes writers, so two concurrent claims cannot
//! both see `assigned_to IS NULL`.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;

use qatrack_core::{NewTestCase, RepositoryError, TestCase, TestCaseRepository};

use super::row_mappers::{TEST_COLUMNS, map_sqlx_error, now_text, row_to_test};

pub struct SqliteTestCaseRepository {
    pool: SqlitePool,
}

impl SqliteTestCaseRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Interpret the result of a conditional `UPDATE ... RETURNING`.
///
/// No row means the condition did not hold.
fn updated_row(
    result: Result<Option<SqliteRow>, sqlx::Error>,
    test_id: &str,
) -> Result<Option<TestCase>, RepositoryError> {
    result
        .map_err(|e| map_sqlx_error(e, &format!("test '{test_id}'")))?
        .map(|row| row_to_test(&row))
        .transpose()
}

#[async_trait]
impl TestCaseRepository for SqliteTestCaseRepository {
    async fn list(&self) -> Result<Vec<TestCase>, RepositoryError> {
        let sql = format!("SELECT {TEST_COLUMNS} FROM tests ORDER BY id");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "tests"))?;
        rows.iter().map(row_to_test).collect()
    }

    async fn get(&self, id: &str) -> Result<TestCase, RepositoryError> {
        let sql = format!("SELECT {TEST_COLUMNS} FROM tests WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "test"))?
            .ok_or_else(|| RepositoryError::NotFound(format!("test '{id}'")))?;
        row_to_test(&row)
    }

    async fn insert(&self, test: &NewTestCase) -> Result<TestCase, RepositoryError> {
        let now = now_text();
        let sql = format!(
            "INSERT INTO tests (id, title, category, description, disabled, assigned_to, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 0, NULL, ?, ?) RETURNING {TEST_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&test.id)
            .bind(&test.title)
            .bind(&test.category)
            .bind(test.description.as_deref())
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, &format!("test '{}'", test.id)))?;
        row_to_test(&row)
    }

    async fn claim(
        &self,
        test_id: &str,
        user_id: &str,
    ) -> Result<Option<TestCase>, RepositoryError> {
        let sql = format!(
            "UPDATE tests SET assigned_to = ?, updated_at = ? \
             WHERE id = ? AND disabled = 0 AND assigned_to IS NULL \
             RETURNING {TEST_COLUMNS}"
        );
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(now_text())
            .bind(test_id)
            .fetch_optional(&self.pool)
            .await;
        updated_row(result, test_id)
    }

    async fn release(
        &self,
        test_id: &str,
        user_id: &str,
    ) -> Result<Option<TestCase>, RepositoryError> {
        let sql = format!(
            "UPDATE tests SET assigned_to = NULL, updated_at = ? \
             WHERE id = ? AND assigned_to = ? \
             RETURNING {TEST_COLUMNS}"
        );
        let result = sqlx::query(&sql)
            .bind(now_text())
            .bind(test_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await;
        updated_row(result, test_id)
    }

    async fn toggle_disabled(
        &self,
        test_id: &str,
        admin_id: &str,
    ) -> Result<Option<TestCase>, RepositoryError> {
        let sql = format!(
            "UPDATE tests SET disabled = NOT disabled, updated_at = ? \
             WHERE id = ? AND EXISTS (SELECT 1 FROM profiles WHERE id = ? AND role = 'admin') \
             RETURNING {TEST_COLUMNS}"
        );
        let result = sqlx::query(&sql)
            .bind(now_text())
            .bind(test_id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await;
        updated_row(result, test_id)
    }

    async fn set_disabled(
        &self,
        test_id: &str,
        admin_id: &str,
        disabled: bool,
    ) -> Result<Option<TestCase>, RepositoryError> {
        let sql = format!(
            "UPDATE tests SET disabled = ?, updated_at = ? \
             WHERE id = ? AND EXISTS (SELECT 1 FROM profiles WHERE id = ? AND role = 'admin') \
             RETURNING {TEST_COLUMNS}"
        );
        let result = sqlx::query(&sql)
            .bind(disabled)
            .bind(now_text())
            .bind(test_id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await;
        updated_row(result, test_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestDb;
    use qatrack_core::Role;

    async fn seeded() -> TestDb {
        let db = TestDb::new().await.unwrap();
        db.add_user("a1", Role::Admin).await;
        db.add_user("u1", Role::Tester).await;
        db.add_user("u2", Role::Tester).await;
        db.add_test("T1").await;
        db
    }

    #[tokio::test]
    async fn claim_is_exclusive() {
        let db = seeded().await;
        let repo = db.test_case_repository();

        let claimed = repo.claim("T1", "u1").await.unwrap().unwrap();
        assert_eq!(claimed.assigned_to.as_deref(), Some("u1"));
        assert!(claimed.updated_at >= claimed.created_at);

        assert!(repo.claim("T1", "u2").await.unwrap().is_none());
        assert!(repo.claim("T1", "u1").await.unwrap().is_none());
        assert!(repo.claim("T404", "u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn claim_requires_enabled_test() {
        let db = seeded().await;
        let repo = db.test_case_repository();
        repo.set_disabled("T1", "a1", true).await.unwrap().unwrap();
        assert!(repo.claim("T1", "u1").await.unwrap().is_none());
        assert_eq!(repo.get("T1").await.unwrap().assigned_to, None);
    }

    #[tokio::test]
    async fn claim_by_unknown_user_violates_foreign_key() {
        let db = seeded().await;
        let err = tokio_test::assert_err!(db.test_case_repository().claim("T1", "ghost").await);
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn release_only_by_holder() {
        let db = seeded().await;
        let repo = db.test_case_repository();

        assert!(tokio_test::assert_ok!(repo.release("T1", "u1").await).is_none());
        repo.claim("T1", "u1").await.unwrap().unwrap();
        assert!(tokio_test::assert_ok!(repo.release("T1", "u2").await).is_none());

        let released = tokio_test::assert_ok!(repo.release("T1", "u1").await).unwrap();
        assert_eq!(released.assigned_to, None);
    }

    #[tokio::test]
    async fn toggle_checks_admin_inside_statement() {
        let db = seeded().await;
        let repo = db.test_case_repository();

        assert!(repo.toggle_disabled("T1", "u1").await.unwrap().is_none());
        assert!(!repo.get("T1").await.unwrap().disabled);

        let on = repo.toggle_disabled("T1", "a1").await.unwrap().unwrap();
        assert!(on.disabled);
        let off = repo.toggle_disabled("T1", "a1").await.unwrap().unwrap();
        assert!(!off.disabled);

        assert!(repo.toggle_disabled("T404", "a1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn disabling_keeps_assignee() {
        let db = seeded().await;
        let repo = db.test_case_repository();
        repo.claim("T1", "u1").await.unwrap().unwrap();

        let t = repo.set_disabled("T1", "a1", true).await.unwrap().unwrap();
        assert!(t.disabled);
        assert_eq!(t.assigned_to.as_deref(), Some("u1"));

        let again = repo.set_disabled("T1", "a1", true).await.unwrap().unwrap();
        assert!(again.disabled);
    }

    #[tokio::test]
    async fn duplicate_insert_already_exists() {
        let db = seeded().await;
        let dup = NewTestCase {
            id: "T1".to_string(),
            title: "Dup".to_string(),
            category: "x".to_string(),
            description: None,
        };
        let err = tokio_test::assert_err!(db.test_case_repository().insert(&dup).await);
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }
}
