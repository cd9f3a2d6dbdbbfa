//! User profile command handlers.

use qatrack_core::NewUser;

use crate::bootstrap::CliContext;
use crate::commands::UsersCommand;
use crate::error::CliError;
use crate::presentation::{format_timestamp, print_separator, truncate_string};

pub async fn execute(ctx: &CliContext, command: UsersCommand) -> Result<(), CliError> {
    match command {
        UsersCommand::List => list(ctx).await,
        UsersCommand::Add { id, name, role } => {
            let user = ctx
                .app()
                .roles()
                .provision(&NewUser {
                    id,
                    display_name: name,
                    role,
                })
                .await?;
            println!("Provisioned {} ({}) as {}", user.display_name, user.id, user.role);
            Ok(())
        }
    }
}

async fn list(ctx: &CliContext) -> Result<(), CliError> {
    let users = ctx.app().roles().list().await?;
    if users.is_empty() {
        println!("No users provisioned.");
        println!("Use 'qatrack users add <id> --name <name>' to add one.");
        return Ok(());
    }

    println!("{:<20} {:<28} {:<8} Created", "ID", "Name", "Role");
    print_separator(78);
    for user in users {
        println!(
            "{:<20} {:<28} {:<8} {}",
            truncate_string(&user.id, 19),
            truncate_string(&user.display_name, 27),
            user.role,
            format_timestamp(&user.created_at)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qatrack_core::Role;

    use crate::bootstrap::{CliConfig, bootstrap};

    #[tokio::test]
    async fn add_provisions_and_rejects_duplicates() {
        let ctx = bootstrap(CliConfig::in_memory()).await.unwrap();
        let add = || UsersCommand::Add {
            id: "a1".to_string(),
            name: "Ada".to_string(),
            role: Role::Admin,
        };

        execute(&ctx, add()).await.unwrap();
        assert_eq!(ctx.app().roles().resolve_role("a1").await.unwrap(), Role::Admin);

        let err = execute(&ctx, add()).await.unwrap_err();
        assert!(matches!(err, CliError::Conflict(_)));

        execute(&ctx, UsersCommand::List).await.unwrap();
    }
}
