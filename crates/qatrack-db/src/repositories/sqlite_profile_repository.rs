//! `SQLite` implementation of the `ProfileRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use qatrack_core::{NewUser, ProfileRepository, RepositoryError, User};

use super::row_mappers::{PROFILE_COLUMNS, map_sqlx_error, now_text, row_to_user};

pub struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY display_name, id");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "profiles"))?;
        rows.iter().map(row_to_user).collect()
    }

    async fn get(&self, id: &str) -> Result<User, RepositoryError> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "profile"))?
            .ok_or_else(|| RepositoryError::NotFound(format!("user '{id}'")))?;
        row_to_user(&row)
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let sql = format!(
            "INSERT INTO profiles (id, display_name, role, created_at) VALUES (?, ?, ?, ?) \
             RETURNING {PROFILE_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&user.id)
            .bind(&user.display_name)
            .bind(user.role.as_str())
            .bind(now_text())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, &format!("user '{}'", user.id)))?;
        row_to_user(&row)
    }
}
