//! Progress DTOs.

use chrono::{DateTime, Utc};
use qatrack_core::{Progress, ProgressSummary};
use serde::{Deserialize, Serialize};

use crate::error::HttpError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDto {
    pub user_id: String,
    pub test_id: String,
    pub completed: bool,
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Progress> for ProgressDto {
    fn from(p: Progress) -> Self {
        Self {
            user_id: p.user_id,
            test_id: p.test_id,
            completed: p.completed,
            notes: p.notes,
            updated_at: p.updated_at,
        }
    }
}

/// Body of `PUT /api/progress/{test_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpsertProgressRequest {
    pub completed: Option<bool>,
    pub notes: Option<String>,
}

impl UpsertProgressRequest {
    /// Returns `(completed, notes)`; `completed` is required.
    pub fn into_parts(self) -> Result<(bool, String), HttpError> {
        let completed = self
            .completed
            .ok_or_else(|| HttpError::BadRequest("completed is required".to_string()))?;
        Ok((completed, self.notes.unwrap_or_default()))
    }
}

/// Query string of `GET /api/progress`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    /// Restrict to one user's records.
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummaryDto {
    pub user_id: String,
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

impl From<ProgressSummary> for ProgressSummaryDto {
    fn from(s: ProgressSummary) -> Self {
        Self {
            user_id: s.user_id,
            completed: s.completed,
            total: s.total,
            percent: s.percent,
        }
    }
}
