//! Web command handler: configure and run the HTTP API server.

use std::path::{Path, PathBuf};

use anyhow::Result;
use qatrack_axum::{CorsConfig, DatabaseLocation, ServerConfig, start_server};
use qatrack_core::CoreConfig;
use qatrack_core::paths::database_path;

/// Dashboard build locations tried when `--static-dir` is not given.
const STATIC_CANDIDATES: [&str; 3] = ["./web/dist", "./dist", "./web"];

/// Arguments of the `web` command.
#[derive(Debug, Clone)]
pub struct WebArgs {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub static_dir: Option<PathBuf>,
    pub api_only: bool,
    pub in_memory: bool,
    pub core: CoreConfig,
}

/// Build the server config from CLI arguments.
///
/// Static directory: `--api-only` > `--static-dir` > first candidate with an
/// `index.html` > API only.
pub fn server_config(args: WebArgs) -> Result<ServerConfig> {
    let database = if args.in_memory {
        DatabaseLocation::InMemory
    } else {
        DatabaseLocation::File(database_path()?)
    };

    let origins: Vec<String> = args
        .cors_origins
        .into_iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();
    let cors = if origins.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(origins)
    };

    let static_dir = if args.api_only {
        None
    } else {
        args.static_dir.or_else(|| {
            STATIC_CANDIDATES
                .iter()
                .map(Path::new)
                .find(|p| p.join("index.html").exists())
                .map(Path::to_path_buf)
        })
    };

    Ok(ServerConfig {
        port: args.port,
        database,
        static_dir,
        cors,
        core: args.core,
    })
}

pub async fn execute(args: WebArgs) -> Result<()> {
    let config = server_config(args)?;

    println!();
    match config.static_dir {
        Some(ref dir) => {
            println!("  qatrack web server starting...");
            println!("  Serving UI from: {}", dir.display());
        }
        None => println!("  qatrack web server starting (API only)..."),
    }
    println!("  API: http://localhost:{}/api", config.port);
    if config.database == DatabaseLocation::InMemory {
        println!("  Database: in-memory (data is lost on exit)");
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}
