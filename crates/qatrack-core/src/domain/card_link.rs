//! Cached project-tracker card links.

use serde::{Deserialize, Serialize};

/// A card from the external project tracker linked to a test.
///
/// These records are written by the tracker connector and only read by the
/// assignment rules. Keyed by (`test_id`, `card_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLink {
    pub test_id: String,
    pub card_id: String,
    pub title: String,
    pub url: String,
}
