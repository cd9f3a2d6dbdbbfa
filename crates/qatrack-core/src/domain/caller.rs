//! Resolved request identities.
//!
//! A `Caller` is a profile that has been looked up for the current request.
//! An `AdminCaller` can only be produced from a `Caller` whose role is
//! `admin`, so operations that take one cannot be reached by testers.

use super::user::{Role, User};
use crate::ports::CoreError;

/// The user behind the current request, with their resolved role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    user: User,
}

impl Caller {
    pub const fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub const fn role(&self) -> Role {
        self.user.role
    }

    pub const fn user(&self) -> &User {
        &self.user
    }

    pub fn into_user(self) -> User {
        self.user
    }

    /// Narrow to an admin identity, or fail with `Forbidden`.
    pub fn require_admin(&self) -> Result<AdminCaller<'_>, CoreError> {
        if self.user.role.is_admin() {
            Ok(AdminCaller { caller: self })
        } else {
            Err(CoreError::Forbidden(format!(
                "user '{}' has role '{}', admin required",
                self.user.id, self.user.role
            )))
        }
    }
}

/// Proof that the caller resolved to the `admin` role.
#[derive(Debug, Clone, Copy)]
pub struct AdminCaller<'a> {
    caller: &'a Caller,
}

impl AdminCaller<'_> {
    pub fn id(&self) -> &str {
        self.caller.id()
    }
}
