//! Command handlers that delegate to AppCore.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that parse CLI input, call AppCore and format output
//!
//! Handlers should NOT access repositories directly or contain rules; the
//! role, ownership and flag checks all live behind `AccessGate`.

pub mod cards;
pub mod paths;
pub mod progress;
pub mod test_cases;
pub mod users;
pub mod web;

use crate::error::CliError;

/// The `--as` user, required by commands that act on someone's behalf.
pub(crate) fn require_caller(caller: Option<&str>) -> Result<&str, CliError> {
    match caller.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(CliError::Arguments(
            "this command needs a caller: pass --as <USER> or set QATRACK_USER".to_string(),
        )),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use qatrack_core::{NewTestCase, NewUser, Role};

    use crate::bootstrap::{CliConfig, CliContext, bootstrap};

    /// In-memory context with admin `a1`, testers `u1` and `u2`, and tests
    /// `T1` and `T2`.
    pub async fn seeded_context() -> CliContext {
        let ctx = bootstrap(CliConfig::in_memory()).await.unwrap();
        for (id, role) in [("a1", Role::Admin), ("u1", Role::Tester), ("u2", Role::Tester)] {
            ctx.app()
                .roles()
                .provision(&NewUser {
                    id: id.to_string(),
                    display_name: id.to_uppercase(),
                    role,
                })
                .await
                .unwrap();
        }
        for id in ["T1", "T2"] {
            ctx.app()
                .gate()
                .create_test(
                    "a1",
                    &NewTestCase {
                        id: id.to_string(),
                        title: format!("Test {id}"),
                        category: "smoke".to_string(),
                        description: None,
                    },
                )
                .await
                .unwrap();
        }
        ctx
    }
}
