//! Tracker card command handlers.

use qatrack_core::CardLink;

use crate::bootstrap::CliContext;
use crate::commands::CardsCommand;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

pub async fn execute(ctx: &CliContext, command: CardsCommand) -> Result<(), CliError> {
    let cards = ctx.app().cards();
    match command {
        CardsCommand::List { test_id } => {
            let links = cards.list(&test_id).await?;
            if links.is_empty() {
                println!("No cards linked to {test_id}.");
                return Ok(());
            }
            println!("{:<16} {:<36} URL", "Card", "Title");
            print_separator(90);
            for link in links {
                println!(
                    "{:<16} {:<36} {}",
                    truncate_string(&link.card_id, 15),
                    truncate_string(&link.title, 35),
                    link.url
                );
            }
            Ok(())
        }
        CardsCommand::Link {
            test_id,
            card_id,
            title,
            url,
        } => {
            let link = cards
                .upsert(&CardLink {
                    test_id,
                    card_id,
                    title,
                    url,
                })
                .await?;
            println!("Linked {} to {}", link.card_id, link.test_id);
            Ok(())
        }
        CardsCommand::Unlink { test_id, card_id } => {
            cards.remove(&test_id, &card_id).await?;
            println!("Unlinked {card_id} from {test_id}");
            Ok(())
        }
    }
}
