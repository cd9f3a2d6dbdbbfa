#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::{
    SqliteCardLinkRepository, SqliteProfileRepository, SqliteProgressRepository,
    SqliteTestCaseRepository,
};

// Re-export setup functions for convenient access
pub use setup::{create_schema, setup_database, setup_in_memory_database};

// Adapters hold the pool for shutdown without depending on sqlx directly
pub use sqlx::SqlitePool;
