//! Test case domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A test case that exists in the store.
///
/// Assignment is modeled as the `assigned_to` field: at most one user holds
/// a test at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Human-assigned identifier (e.g. "TC-101").
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    /// Disabled tests cannot be claimed. An existing claim is kept.
    pub disabled: bool,
    /// Profile id of the current holder, if any.
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TestCase {
    /// True when the test can be claimed right now.
    pub const fn is_claimable(&self) -> bool {
        !self.disabled && self.assigned_to.is_none()
    }

    pub fn is_held_by(&self, user_id: &str) -> bool {
        self.assigned_to.as_deref() == Some(user_id)
    }
}

/// A test case to be inserted (no timestamps yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTestCase {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}
