//! Progress command handlers.

use super::require_caller;
use crate::bootstrap::CliContext;
use crate::commands::ProgressCommand;
use crate::error::CliError;
use crate::presentation::{format_timestamp, print_separator, truncate_string};

pub async fn execute(
    ctx: &CliContext,
    caller: Option<&str>,
    command: ProgressCommand,
) -> Result<(), CliError> {
    match command {
        ProgressCommand::List { user } => list(ctx, user.as_deref()).await,
        ProgressCommand::Set {
            test_id,
            completed,
            notes,
        } => {
            let record = ctx
                .app()
                .gate()
                .upsert_progress(require_caller(caller)?, &test_id, completed, &notes)
                .await?;
            println!(
                "{} / {}: {}",
                record.user_id,
                record.test_id,
                if record.completed { "completed" } else { "open" }
            );
            Ok(())
        }
        ProgressCommand::Summary { user_id } => {
            let summary = ctx.app().progress().summary_for(&user_id).await?;
            println!(
                "{}: {}/{} enabled tests completed ({:.1}%)",
                summary.user_id, summary.completed, summary.total, summary.percent
            );
            Ok(())
        }
    }
}

async fn list(ctx: &CliContext, user: Option<&str>) -> Result<(), CliError> {
    let tracker = ctx.app().progress();
    let records = match user {
        Some(user_id) => tracker.list_for(user_id).await?,
        None => tracker.list().await?,
    };
    if records.is_empty() {
        println!("No progress recorded.");
        return Ok(());
    }

    println!(
        "{:<20} {:<12} {:<6} {:<20} Notes",
        "User", "Test", "Done", "Updated"
    );
    print_separator(90);
    for record in records {
        println!(
            "{:<20} {:<12} {:<6} {:<20} {}",
            truncate_string(&record.user_id, 19),
            truncate_string(&record.test_id, 11),
            if record.completed { "yes" } else { "no" },
            format_timestamp(&record.updated_at),
            truncate_string(&record.notes, 40)
        );
    }
    Ok(())
}
