//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use qatrack_core::{AppCore, CoreConfig, Repos};

use crate::repositories::{
    SqliteCardLinkRepository, SqliteProfileRepository, SqliteProgressRepository,
    SqliteTestCaseRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `qatrack-core` containing trait-object-wrapped
    /// repositories.
    pub fn build_repos(pool: &SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteProfileRepository::new(pool.clone())),
            Arc::new(SqliteTestCaseRepository::new(pool.clone())),
            Arc::new(SqliteProgressRepository::new(pool.clone())),
            Arc::new(SqliteCardLinkRepository::new(pool.clone())),
        )
    }

    /// Build a complete `AppCore` from a pool.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_app_core(&pool, CoreConfig::default());
    /// ```
    pub fn build_app_core(pool: &SqlitePool, config: CoreConfig) -> AppCore {
        AppCore::new(Self::build_repos(pool), config)
    }
}

/// Test database helper.
///
/// An in-memory `SQLite` database with the production schema applied, plus
/// seeding helpers that bypass the core's validation.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_in_memory_database().await?;
        Ok(Self { pool })
    }

    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(&self.pool)
    }

    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(&self.pool, CoreConfig::default())
    }

    pub fn profile_repository(&self) -> SqliteProfileRepository {
        SqliteProfileRepository::new(self.pool.clone())
    }

    pub fn test_case_repository(&self) -> SqliteTestCaseRepository {
        SqliteTestCaseRepository::new(self.pool.clone())
    }

    pub fn progress_repository(&self) -> SqliteProgressRepository {
        SqliteProgressRepository::new(self.pool.clone())
    }

    pub fn card_link_repository(&self) -> SqliteCardLinkRepository {
        SqliteCardLinkRepository::new(self.pool.clone())
    }

    /// Insert a profile; display name is the id upper-cased.
    ///
    /// # Panics
    ///
    /// Panics if the insert fails.
    pub async fn add_user(&self, id: &str, role: qatrack_core::Role) {
        use qatrack_core::ProfileRepository;
        self.profile_repository()
            .insert(&qatrack_core::NewUser {
                id: id.to_string(),
                display_name: id.to_uppercase(),
                role,
            })
            .await
            .expect("seed user");
    }

    /// Insert an enabled, unassigned test.
    ///
    /// # Panics
    ///
    /// Panics if the insert fails.
    pub async fn add_test(&self, id: &str) {
        use qatrack_core::TestCaseRepository;
        self.test_case_repository()
            .insert(&qatrack_core::NewTestCase {
                id: id.to_string(),
                title: format!("Test {id}"),
                category: "general".to_string(),
                description: None,
            })
            .await
            .expect("seed test");
    }
}
