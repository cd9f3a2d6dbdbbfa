//! Input validation for domain DTOs.
//!
//! Every write path validates its input here before touching a repository,
//! so missing or malformed fields fail fast with `CoreError::InvalidInput`
//! instead of reaching the store.

use crate::domain::{CardLink, NewTestCase, NewUser, ProgressUpdate};
use crate::ports::CoreError;

/// Longest accepted identifier (user ids, test ids, card ids), in characters.
pub const MAX_ID_LEN: usize = 128;

/// Longest accepted free-text notes on a progress record, in characters.
pub const MAX_NOTES_LEN: usize = 10_000;

/// Require a non-blank value, returning it trimmed.
///
/// # Examples
///
/// ```rust
/// use qatrack_core::utils::validation::require_non_empty;
///
/// assert_eq!(require_non_empty("title", "  Login ").unwrap(), "Login");
/// assert!(require_non_empty("title", "   ").is_err());
/// ```
pub fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Require a usable identifier: non-blank, bounded, no whitespace inside.
pub fn require_id<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let id = require_non_empty(field, value)?;
    if id.chars().count() > MAX_ID_LEN {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be at most {MAX_ID_LEN} characters"
        )));
    }
    if id.chars().any(char::is_whitespace) {
        return Err(CoreError::InvalidInput(format!(
            "{field} must not contain whitespace"
        )));
    }
    Ok(id)
}

/// Validate and normalize a test case before insert.
pub fn validate_new_test(test: &NewTestCase) -> Result<NewTestCase, CoreError> {
    let description = test
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(ToString::to_string);

    Ok(NewTestCase {
        id: require_id("id", &test.id)?.to_string(),
        title: require_non_empty("title", &test.title)?.to_string(),
        category: require_non_empty("category", &test.category)?.to_string(),
        description,
    })
}

/// Validate and normalize a profile before provisioning.
pub fn validate_new_user(user: &NewUser) -> Result<NewUser, CoreError> {
    Ok(NewUser {
        id: require_id("id", &user.id)?.to_string(),
        display_name: require_non_empty("display_name", &user.display_name)?.to_string(),
        role: user.role,
    })
}

/// Validate a progress update. Notes may be empty but are bounded.
pub fn validate_progress_update(update: &ProgressUpdate) -> Result<ProgressUpdate, CoreError> {
    if update.notes.chars().count() > MAX_NOTES_LEN {
        return Err(CoreError::InvalidInput(format!(
            "notes must be at most {MAX_NOTES_LEN} characters"
        )));
    }
    Ok(ProgressUpdate {
        user_id: require_id("user_id", &update.user_id)?.to_string(),
        test_id: require_id("test_id", &update.test_id)?.to_string(),
        completed: update.completed,
        notes: update.notes.clone(),
    })
}

/// Validate a cached card link.
pub fn validate_card_link(link: &CardLink) -> Result<CardLink, CoreError> {
    let url = require_non_empty("url", &link.url)?;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(CoreError::InvalidInput(
            "url must start with http:// or https://".to_string(),
        ));
    }
    Ok(CardLink {
        test_id: require_id("test_id", &link.test_id)?.to_string(),
        card_id: require_id("card_id", &link.card_id)?.to_string(),
        title: require_non_empty("title", &link.title)?.to_string(),
        url: url.to_string(),
    })
}
