//! Card link service - cached project-tracker cards per test.

use std::sync::Arc;

use super::Deadline;
use crate::domain::CardLink;
use crate::ports::{CardLinkRepository, CoreError, TestCaseRepository};
use crate::utils::validation::{require_id, validate_card_link};

#[derive(Clone)]
pub struct CardLinkService {
    tests: Arc<dyn TestCaseRepository>,
    links: Arc<dyn CardLinkRepository>,
    deadline: Deadline,
}

impl CardLinkService {
    pub fn new(
        tests: Arc<dyn TestCaseRepository>,
        links: Arc<dyn CardLinkRepository>,
        deadline: Deadline,
    ) -> Self {
        Self {
            tests,
            links,
            deadline,
        }
    }

    /// Cards for `test_id`. `NotFound` for unknown tests, empty for tests
    /// without links.
    pub async fn list(&self, test_id: &str) -> Result<Vec<CardLink>, CoreError> {
        let test_id = require_id("test_id", test_id)?;
        self.deadline
            .bound("list_cards", async {
                self.deadline.run("get_test", self.tests.get(test_id)).await?;
                self.deadline
                    .run("list_card_links", self.links.list_for_test(test_id))
                    .await
            })
            .await
    }

    /// Cache or refresh a card for a test.
    pub async fn upsert(&self, link: &CardLink) -> Result<CardLink, CoreError> {
        let link = validate_card_link(link)?;
        self.deadline
            .bound("cache_card", async {
                self.deadline
                    .run("get_test", self.tests.get(&link.test_id))
                    .await?;
                self.deadline
                    .run("upsert_card_link", self.links.upsert(&link))
                    .await
            })
            .await
    }

    pub async fn remove(&self, test_id: &str, card_id: &str) -> Result<(), CoreError> {
        let test_id = require_id("test_id", test_id)?;
        let card_id = require_id("card_id", card_id)?;
        self.deadline
            .run("remove_card_link", self.links.remove(test_id, card_id))
            .await
    }
}
