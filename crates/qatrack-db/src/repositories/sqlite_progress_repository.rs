//! `SQLite` implementation of the `ProgressRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use qatrack_core::{Progress, ProgressRepository, ProgressUpdate, RepositoryError};

use super::row_mappers::{PROGRESS_COLUMNS, map_sqlx_error, now_text, row_to_progress};

pub struct SqliteProgressRepository {
    pool: SqlitePool,
}

impl SqliteProgressRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressRepository for SqliteProgressRepository {
    async fn upsert(&self, update: &ProgressUpdate) -> Result<Progress, RepositoryError> {
        // MAX keeps updated_at monotonic if the wall clock steps back.
        let sql = format!(
            "INSERT INTO progress (user_id, test_id, completed, notes, updated_at) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT(user_id, test_id) DO UPDATE SET \
                 completed = excluded.completed, \
                 notes = excluded.notes, \
                 updated_at = MAX(progress.updated_at, excluded.updated_at) \
             RETURNING {PROGRESS_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&update.user_id)
            .bind(&update.test_id)
            .bind(update.completed)
            .bind(&update.notes)
            .bind(now_text())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_sqlx_error(
                    e,
                    &format!("progress ({}, {})", update.user_id, update.test_id),
                )
            })?;
        row_to_progress(&row)
    }

    async fn list(&self) -> Result<Vec<Progress>, RepositoryError> {
        let sql = format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress ORDER BY updated_at DESC, user_id, test_id"
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "progress"))?;
        rows.iter().map(row_to_progress).collect()
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Progress>, RepositoryError> {
        let sql = format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress WHERE user_id = ? \
             ORDER BY updated_at DESC, test_id"
        );
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "progress"))?;
        rows.iter().map(row_to_progress).collect()
    }
}
