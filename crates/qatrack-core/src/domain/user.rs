//! User profile types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role attached to a profile.
///
/// Roles are provisioned outside the normal mutation paths and are
/// read-only to every operation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Tester,
}

impl Role {
    /// Stable lowercase name, as stored and serialized.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Tester => "tester",
        }
    }

    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role string that is neither `admin` nor `tester`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}' (expected 'admin' or 'tester')")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "tester" => Ok(Self::Tester),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// A persisted user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier issued by the identity service.
    pub id: String,
    /// Name shown on the dashboard.
    pub display_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// A profile to be provisioned (no timestamp yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub id: String,
    pub display_name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" tester ".parse::<Role>(), Ok(Role::Tester));
        assert_eq!(
            "owner".parse::<Role>(),
            Err(UnknownRole("owner".to_string()))
        );
    }

    #[test]
    fn role_display_matches_stored_name() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Tester.to_string(), Role::Tester.as_str());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Tester.is_admin());
    }
}
