//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Mutations that guard an invariant are single conditional updates
//!   (compare-and-set), reported as `Ok(None)` when the condition did not hold
//! - Upserts are keyed so that retries cannot create duplicates

pub mod card_link_repository;
pub mod profile_repository;
pub mod progress_repository;
pub mod test_case_repository;

use std::sync::Arc;
use thiserror::Error;

// Re-export repository traits for convenience
pub use card_link_repository::CardLinkRepository;
pub use profile_repository::ProfileRepository;
pub use progress_repository::ProgressRepository;
pub use test_case_repository::TestCaseRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in `qatrack-core`
/// so that `AppCore` can accept it without depending on `qatrack-db`.
#[derive(Clone)]
pub struct Repos {
    /// Profile repository (identity and role lookups).
    pub profiles: Arc<dyn ProfileRepository>,
    /// Test case repository, including the assignment and flag updates.
    pub tests: Arc<dyn TestCaseRepository>,
    /// Progress repository.
    pub progress: Arc<dyn ProgressRepository>,
    /// Cached tracker card links.
    pub card_links: Arc<dyn CardLinkRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        tests: Arc<dyn TestCaseRepository>,
        progress: Arc<dyn ProgressRepository>,
        card_links: Arc<dyn CardLinkRepository>,
    ) -> Self {
        Self {
            profiles,
            tests,
            progress,
            card_links,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, network, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, check constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Every kind is distinct so callers can render a precise message
/// ("already claimed by someone else" vs "you don't hold this test").
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Referenced entity is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Role check failed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Release attempted by someone other than the holder.
    #[error("Not owner: {0}")]
    NotOwner(String),

    /// Claim attempted on a test that already has a holder.
    #[error("Already assigned: {0}")]
    AlreadyAssigned(String),

    /// Claim attempted on a disabled test.
    #[error("Disabled: {0}")]
    Disabled(String),

    /// Store unreachable, failing, or over the request deadline.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Missing or malformed input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An entity with the same identifier already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Stable discriminant for clients (HTTP `type` field, CLI output).
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotOwner(_) => "NOT_OWNER",
            Self::AlreadyAssigned(_) => "ALREADY_ASSIGNED",
            Self::Disabled(_) => "DISABLED",
            Self::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(msg),
            RepositoryError::Storage(msg) => Self::BackendUnavailable(msg),
            RepositoryError::Serialization(msg) => Self::Internal(msg),
            RepositoryError::Constraint(msg) => Self::InvalidInput(msg),
        }
    }
}
