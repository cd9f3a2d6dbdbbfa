#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for helpers used only by integration tests
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, CorsConfig, DatabaseLocation, ServerConfig, bootstrap, start_server,
};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
