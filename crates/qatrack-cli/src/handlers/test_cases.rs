//! Test case command handlers: catalog, claims and the disabled flag.

use qatrack_core::{NewTestCase, TestCase};

use super::require_caller;
use crate::bootstrap::CliContext;
use crate::commands::TestsCommand;
use crate::error::CliError;
use crate::presentation::{format_optional, print_separator, truncate_string};

pub async fn execute(
    ctx: &CliContext,
    caller: Option<&str>,
    command: TestsCommand,
) -> Result<(), CliError> {
    let gate = ctx.app().gate();
    match command {
        TestsCommand::List => list(ctx).await,
        TestsCommand::Add {
            id,
            title,
            category,
            description,
        } => {
            let test = gate
                .create_test(
                    require_caller(caller)?,
                    &NewTestCase {
                        id,
                        title,
                        category,
                        description,
                    },
                )
                .await?;
            println!("Created test {}: {}", test.id, test.title);
            Ok(())
        }
        TestsCommand::Assign { test_id } => {
            let test = gate.assign_test(require_caller(caller)?, &test_id).await?;
            println!("{} is now assigned to {}", test.id, format_holder(&test));
            Ok(())
        }
        TestsCommand::Unassign { test_id } => {
            let test = gate.unassign_test(require_caller(caller)?, &test_id).await?;
            println!("{} released", test.id);
            Ok(())
        }
        TestsCommand::Toggle { test_id } => {
            let test = gate.toggle_disabled(require_caller(caller)?, &test_id).await?;
            print_flag(&test);
            Ok(())
        }
        TestsCommand::Disable { test_id } => {
            let test = gate.set_disabled(require_caller(caller)?, &test_id, true).await?;
            print_flag(&test);
            Ok(())
        }
        TestsCommand::Enable { test_id } => {
            let test = gate.set_disabled(require_caller(caller)?, &test_id, false).await?;
            print_flag(&test);
            Ok(())
        }
    }
}

async fn list(ctx: &CliContext) -> Result<(), CliError> {
    let tests = ctx.app().catalog().list().await?;
    if tests.is_empty() {
        println!("No test cases found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<32} {:<14} {:<9} Assigned to",
        "ID", "Title", "Category", "State"
    );
    print_separator(90);
    for test in &tests {
        println!(
            "{:<12} {:<32} {:<14} {:<9} {}",
            truncate_string(&test.id, 11),
            truncate_string(&test.title, 31),
            truncate_string(&test.category, 13),
            state_label(test),
            format_holder(test)
        );
    }
    Ok(())
}

const fn state_label(test: &TestCase) -> &'static str {
    if test.disabled { "disabled" } else { "enabled" }
}

fn format_holder(test: &TestCase) -> String {
    format_optional(test.assigned_to.as_ref(), "--")
}

fn print_flag(test: &TestCase) {
    println!("{} is now {}", test.id, state_label(test));
}
