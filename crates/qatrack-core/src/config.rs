//! Core runtime configuration.
//!
//! Adapters build a `CoreConfig` from their own flags or environment and pass
//! it to [`AppCore::new`](crate::services::AppCore::new).

use std::time::Duration;

/// Default upper bound on a single store round trip.
pub const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration shared by every core service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreConfig {
    /// Deadline applied to each repository call and, as a whole, to each
    /// multi-call operation (every gate operation, progress and card reads
    /// that check existence first). Expiry is reported as
    /// `CoreError::BackendUnavailable`.
    pub backend_timeout: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            backend_timeout: DEFAULT_BACKEND_TIMEOUT,
        }
    }
}

impl CoreConfig {
    /// Override the backend timeout.
    #[must_use]
    pub const fn with_backend_timeout(mut self, timeout: Duration) -> Self {
        self.backend_timeout = timeout;
        self
    }

    /// Build from a millisecond value, as read from flags or environment.
    ///
    /// Zero falls back to the default rather than disabling the deadline.
    pub const fn from_timeout_ms(ms: u64) -> Self {
        if ms == 0 {
            Self {
                backend_timeout: DEFAULT_BACKEND_TIMEOUT,
            }
        } else {
            Self {
                backend_timeout: Duration::from_millis(ms),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ms_keeps_default() {
        assert_eq!(CoreConfig::from_timeout_ms(0), CoreConfig::default());
        assert_eq!(
            CoreConfig::from_timeout_ms(250).backend_timeout,
            Duration::from_millis(250)
        );
    }
}
