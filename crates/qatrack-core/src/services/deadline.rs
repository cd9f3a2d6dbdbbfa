//! Deadline for store round trips and the operations built from them.

use std::future::Future;
use std::time::Duration;

use crate::config::CoreConfig;
use crate::ports::{CoreError, RepositoryError};

/// Bounds repository calls, and whole multi-call operations, by the
/// configured backend timeout.
///
/// The wrapped future is dropped on expiry. Store mutations are single
/// statements, so each call of a dropped operation has either fully applied
/// or not at all.
/// Calls are never retried.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    timeout: Duration,
}

impl Deadline {
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub const fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.backend_timeout)
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `call`, mapping its error into `CoreError` and expiry into
    /// `CoreError::BackendUnavailable`.
    pub async fn run<T, F>(&self, op: &'static str, call: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, RepositoryError>>,
    {
        self.bound(op, async { call.await.map_err(CoreError::from) }).await
    }

    /// Bound a whole operation that makes several store calls.
    ///
    /// Each inner call keeps its own deadline, so the first expiry wins and
    /// the operation never outlives a single `timeout`.
    pub async fn bound<T, F>(&self, op: &'static str, work: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        match tokio::time::timeout(self.timeout, work).await {
            Ok(result) => result,
            Err(_) => Err(self.expired(op)),
        }
    }

    fn expired(&self, op: &'static str) -> CoreError {
        tracing::warn!(
            target: "qatrack.gate",
            op,
            timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            "store call exceeded deadline"
        );
        CoreError::BackendUnavailable(format!(
            "{op} did not complete within {:?}",
            self.timeout
        ))
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::from_config(&CoreConfig::default())
    }
}
