//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The database pool and `AppCore` are built
//! here, handed to the router as state, and closed again on shutdown.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use qatrack_core::paths::database_path;
use qatrack_core::{AppCore, CoreConfig};
use qatrack_db::{CoreFactory, SqlitePool, setup_database, setup_in_memory_database};
use tracing::info;

use crate::state::AppState;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8787;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// SQLite file, created if missing.
    File(PathBuf),
    /// Throwaway in-memory database (tests, demos).
    InMemory,
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    pub database: DatabaseLocation,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    pub cors: CorsConfig,
    /// Core settings (backend timeout).
    pub core: CoreConfig,
}

impl ServerConfig {
    /// Create config with the default database path.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            port: DEFAULT_PORT,
            database: DatabaseLocation::File(database_path()?),
            static_dir: None,
            cors: CorsConfig::default(),
            core: CoreConfig::default(),
        })
    }

    /// Config backed by an in-memory database; touches no files.
    pub fn in_memory() -> Self {
        Self {
            port: 0,
            database: DatabaseLocation::InMemory,
            static_dir: None,
            cors: CorsConfig::default(),
            core: CoreConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub const fn with_core(mut self, core: CoreConfig) -> Self {
        self.core = core;
        self
    }
}

/// Application context for the Axum adapter.
///
/// Owns the backend client (the pool) for the life of the process. There is
/// no global connection: handlers reach the store only through this context.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
    pool: SqlitePool,
}

impl AxumContext {
    /// Close the pool. In-flight statements finish first.
    pub async fn shutdown(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}

/// Bootstrap the Axum server: open the store and build `AppCore`.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    let pool = match &config.database {
        DatabaseLocation::File(path) => {
            info!(target: "qatrack.paths", database = %path.display(), "opening database");
            setup_database(path).await?
        }
        DatabaseLocation::InMemory => setup_in_memory_database().await?,
    };

    let core = Arc::new(CoreFactory::build_app_core(&pool, config.core));
    info!(
        backend_timeout_ms = u64::try_from(config.core.backend_timeout.as_millis()).unwrap_or(u64::MAX),
        "core ready"
    );

    Ok(AxumContext { core, pool })
}

/// Start the Axum server and block until Ctrl+C.
///
/// Stops accepting connections, drains in-flight requests, then closes the
/// pool.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let state: AppState = Arc::new(bootstrap(config.clone()).await?);

    // Choose router based on whether static serving is configured
    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(state.clone(), static_dir, &config.cors)
    } else {
        crate::routes::create_router(state.clone(), &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("qatrack web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.shutdown().await;
    info!("qatrack web server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {e}");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_bootstrap_and_shutdown() {
        let ctx = bootstrap(ServerConfig::in_memory()).await.unwrap();
        assert!(ctx.core.catalog().list().await.unwrap().is_empty());
        ctx.shutdown().await;
    }

    #[test]
    fn builders_apply() {
        let config = ServerConfig::in_memory()
            .with_port(9000)
            .with_allowed_origins(vec!["https://qa.example.com".to_string()]);
        assert_eq!(config.port, 9000);
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o.len() == 1));
    }
}
