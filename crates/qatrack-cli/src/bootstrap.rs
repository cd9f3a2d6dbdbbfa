//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database pool, the repositories and the
//! `AppCore` built over them. Command handlers receive the composed context
//! and delegate work to it.

use anyhow::Result;
use qatrack_axum::DatabaseLocation;
use qatrack_core::paths::database_path;
use qatrack_core::{AppCore, CoreConfig};
use qatrack_db::{CoreFactory, SqlitePool, setup_database, setup_in_memory_database};
use tracing::debug;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub database: DatabaseLocation,
    /// Core settings (backend timeout).
    pub core: CoreConfig,
}

impl CliConfig {
    /// Create config with the default database path.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database: DatabaseLocation::File(database_path()?),
            core: CoreConfig::default(),
        })
    }

    /// Config backed by an in-memory database.
    pub fn in_memory() -> Self {
        Self {
            database: DatabaseLocation::InMemory,
            core: CoreConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_core(mut self, core: CoreConfig) -> Self {
        self.core = core;
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    app: AppCore,
    pool: SqlitePool,
}

impl CliContext {
    /// Access the AppCore.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Close the pool once the command has finished.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}

/// Bootstrap the CLI application: open the store and assemble `AppCore`.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let pool = match &config.database {
        DatabaseLocation::File(path) => {
            debug!(target: "qatrack.paths", database = %path.display(), "opening database");
            setup_database(path).await?
        }
        DatabaseLocation::InMemory => setup_in_memory_database().await?,
    };
    let app = CoreFactory::build_app_core(&pool, config.core);

    Ok(CliContext { app, pool })
}
