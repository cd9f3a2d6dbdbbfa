//! `SQLite` implementation of the `CardLinkRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use qatrack_core::{CardLink, CardLinkRepository, RepositoryError};

use super::row_mappers::{CARD_LINK_COLUMNS, map_sqlx_error, row_to_card_link};

pub struct SqliteCardLinkRepository {
    pool: SqlitePool,
}

impl SqliteCardLinkRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardLinkRepository for SqliteCardLinkRepository {
    async fn list_for_test(&self, test_id: &str) -> Result<Vec<CardLink>, RepositoryError> {
        let sql = format!("SELECT {CARD_LINK_COLUMNS} FROM card_links WHERE test_id = ? ORDER BY card_id");
        let rows = sqlx::query(&sql)
            .bind(test_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "card links"))?;
        rows.iter().map(row_to_card_link).collect()
    }

    async fn upsert(&self, link: &CardLink) -> Result<CardLink, RepositoryError> {
        let sql = format!(
            "INSERT INTO card_links (test_id, card_id, title, url) VALUES (?, ?, ?, ?) \
             ON CONFLICT(test_id, card_id) DO UPDATE SET title = excluded.title, url = excluded.url \
             RETURNING {CARD_LINK_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&link.test_id)
            .bind(&link.card_id)
            .bind(&link.title)
            .bind(&link.url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, &format!("card '{}'", link.card_id)))?;
        row_to_card_link(&row)
    }

    async fn remove(&self, test_id: &str, card_id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM card_links WHERE test_id = ? AND card_id = ?")
            .bind(test_id)
            .bind(card_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "card link"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "card '{card_id}' on test '{test_id}'"
            )));
        }
        Ok(())
    }
}
