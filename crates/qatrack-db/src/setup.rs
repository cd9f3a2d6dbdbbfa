//! Database setup and initialization.
//!
//! Entry points call [`setup_database`] with the resolved database path, or
//! [`setup_in_memory_database`] for throwaway stores (tests, demos).

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

/// Upper bound on pooled connections for file-backed databases.
const MAX_CONNECTIONS: u32 = 8;

/// How long a statement waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// How long a caller waits for a free pooled connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (creating if needed) the database file and ensure the schema exists.
///
/// # Example
///
/// ```rust,no_run
/// use qatrack_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/tmp/qatrack/qatrack.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    tracing::info!(target: "qatrack.db", path = %db_path.display(), "database ready");

    Ok(pool)
}

/// Create a fresh in-memory database with the full schema.
///
/// Each in-memory connection is its own database, so the pool holds exactly
/// one connection and never recycles it.
pub async fn setup_in_memory_database() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times; every statement uses IF NOT EXISTS.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS profiles (
            id TEXT PRIMARY KEY NOT NULL,
            display_name TEXT NOT NULL,
            role TEXT NOT NULL CHECK (role IN ('admin', 'tester')),
            created_at TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS tests (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            category TEXT NOT NULL,
            description TEXT,
            disabled INTEGER NOT NULL DEFAULT 0 CHECK (disabled IN (0, 1)),
            assigned_to TEXT REFERENCES profiles(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tests_assigned_to ON tests(assigned_to)")
        .execute(pool)
        .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS progress (
            user_id TEXT NOT NULL REFERENCES profiles(id),
            test_id TEXT NOT NULL REFERENCES tests(id),
            completed INTEGER NOT NULL DEFAULT 0 CHECK (completed IN (0, 1)),
            notes TEXT NOT NULL DEFAULT '',
            updated_at TEXT NOT NULL,
            PRIMARY KEY (user_id, test_id)
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_progress_updated_at ON progress(updated_at)")
        .execute(pool)
        .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS card_links (
            test_id TEXT NOT NULL REFERENCES tests(id) ON DELETE CASCADE,
            card_id TEXT NOT NULL,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            PRIMARY KEY (test_id, card_id)
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
