//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_card_link_repository;
mod sqlite_profile_repository;
mod sqlite_progress_repository;
mod sqlite_test_case_repository;

pub use sqlite_card_link_repository::SqliteCardLinkRepository;
pub use sqlite_profile_repository::SqliteProfileRepository;
pub use sqlite_progress_repository::SqliteProgressRepository;
pub use sqlite_test_case_repository::SqliteTestCaseRepository;
