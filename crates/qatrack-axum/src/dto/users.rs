//! User DTOs.

use chrono::{DateTime, Utc};
use qatrack_core::{Role, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub display_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            display_name: u.display_name,
            role: u.role,
            created_at: u.created_at,
        }
    }
}
