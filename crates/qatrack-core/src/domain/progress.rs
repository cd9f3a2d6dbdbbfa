//! Progress domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of one test for one user.
///
/// There is at most one record per (user, test) pair. Records are created
/// on first upsert and never deleted in normal operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub user_id: String,
    pub test_id: String,
    pub completed: bool,
    pub notes: String,
    /// Refreshed on every upsert; never moves backwards.
    pub updated_at: DateTime<Utc>,
}

/// Input for an upsert keyed on (user, test).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub user_id: String,
    pub test_id: String,
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
}

/// Per-user completion aggregate over enabled tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub user_id: String,
    pub completed: usize,
    pub total: usize,
    /// 0.0 when there are no enabled tests.
    pub percent: f64,
}

impl ProgressSummary {
    pub fn new(user_id: impl Into<String>, completed: usize, total: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let percent = if total == 0 {
            0.0
        } else {
            (completed as f64 / total as f64) * 100.0
        };
        Self {
            user_id: user_id.into(),
            completed,
            total,
            percent,
        }
    }
}
