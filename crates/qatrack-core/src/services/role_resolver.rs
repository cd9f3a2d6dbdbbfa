//! Role resolver - maps a user identifier to a profile and role.

use std::sync::Arc;

use super::Deadline;
use crate::domain::{Caller, NewUser, Role, User};
use crate::ports::{CoreError, ProfileRepository};
use crate::utils::validation::{require_id, validate_new_user};

/// Resolves callers against the profile store. Pure reads, except for
/// `provision`, which stands in for the external provisioning process.
#[derive(Clone)]
pub struct RoleResolver {
    profiles: Arc<dyn ProfileRepository>,
    deadline: Deadline,
}

impl RoleResolver {
    pub fn new(profiles: Arc<dyn ProfileRepository>, deadline: Deadline) -> Self {
        Self { profiles, deadline }
    }

    /// Full profile for `user_id`, or `NotFound`.
    pub async fn resolve(&self, user_id: &str) -> Result<User, CoreError> {
        let user_id = require_id("user_id", user_id)?;
        self.deadline
            .run("resolve_user", self.profiles.get(user_id))
            .await
    }

    /// Role for `user_id`, or `NotFound`.
    pub async fn resolve_role(&self, user_id: &str) -> Result<Role, CoreError> {
        Ok(self.resolve(user_id).await?.role)
    }

    /// Resolve the identity behind a request.
    pub async fn caller(&self, user_id: &str) -> Result<Caller, CoreError> {
        self.resolve(user_id).await.map(Caller::new)
    }

    pub async fn list(&self) -> Result<Vec<User>, CoreError> {
        self.deadline.run("list_users", self.profiles.list()).await
    }

    /// Create a profile. `Conflict` if the id is taken.
    pub async fn provision(&self, user: &NewUser) -> Result<User, CoreError> {
        let user = validate_new_user(user)?;
        let created = self
            .deadline
            .run("provision_user", self.profiles.insert(&user))
            .await?;
        tracing::info!(target: "qatrack.gate", user_id = %created.id, role = %created.role, "provisioned profile");
        Ok(created)
    }
}
