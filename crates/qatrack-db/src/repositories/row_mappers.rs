//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use qatrack_core::{CardLink, Progress, RepositoryError, Role, TestCase, User};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite};

/// Shared SELECT/RETURNING column lists.
pub const PROFILE_COLUMNS: &str = "id, display_name, role, created_at";
pub const TEST_COLUMNS: &str =
    "id, title, category, description, disabled, assigned_to, created_at, updated_at";
pub const PROGRESS_COLUMNS: &str = "user_id, test_id, completed, notes, updated_at";
pub const CARD_LINK_COLUMNS: &str = "test_id, card_id, title, url";

/// Fixed-width storage format; text order equals time order.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Current time in storage format.
pub fn now_text() -> String {
    format_timestamp(Utc::now())
}

/// Parse a stored timestamp. Accepts a trailing " UTC" and any fractional
/// precision for rows written by hand.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let trimmed = raw.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp '{raw}': {e}")))
}

/// Map `SQLx` errors to `RepositoryError`, naming the entity involved.
pub fn map_sqlx_error(err: sqlx::Error, entity: &str) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound(entity.to_string()),
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::AlreadyExists(entity.to_string())
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() || db.is_check_violation() => {
            RepositoryError::Constraint(format!("{entity}: {}", db.message()))
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Serialization(format!("column {name}: {e}")))
}

fn timestamp_column(row: &SqliteRow, name: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let raw: String = column(row, name)?;
    parse_timestamp(&raw)
}

pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    let role: String = column(row, "role")?;
    Ok(User {
        id: column(row, "id")?,
        display_name: column(row, "display_name")?,
        role: role
            .parse::<Role>()
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?,
        created_at: timestamp_column(row, "created_at")?,
    })
}

pub fn row_to_test(row: &SqliteRow) -> Result<TestCase, RepositoryError> {
    Ok(TestCase {
        id: column(row, "id")?,
        title: column(row, "title")?,
        category: column(row, "category")?,
        description: column(row, "description")?,
        disabled: column(row, "disabled")?,
        assigned_to: column(row, "assigned_to")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}

pub fn row_to_progress(row: &SqliteRow) -> Result<Progress, RepositoryError> {
    Ok(Progress {
        user_id: column(row, "user_id")?,
        test_id: column(row, "test_id")?,
        completed: column(row, "completed")?,
        notes: column(row, "notes")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}

pub fn row_to_card_link(row: &SqliteRow) -> Result<CardLink, RepositoryError> {
    Ok(CardLink {
        test_id: column(row, "test_id")?,
        card_id: column(row, "card_id")?,
        title: column(row, "title")?,
        url: column(row, "url")?,
    })
}
