//! Test case DTOs.

use chrono::{DateTime, Utc};
use qatrack_core::{CardLink, NewTestCase, TestCase};
use serde::{Deserialize, Serialize};

use super::required;
use crate::error::HttpError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDto {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub disabled: bool,
    /// Null when nobody holds the test.
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TestCase> for TestDto {
    fn from(t: TestCase) -> Self {
        Self {
            id: t.id,
            title: t.title,
            category: t.category,
            description: t.description,
            disabled: t.disabled,
            assigned_to: t.assigned_to,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Body of `POST /api/tests`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl CreateTestRequest {
    pub fn into_new_test(self) -> Result<NewTestCase, HttpError> {
        Ok(NewTestCase {
            id: required("id", self.id)?,
            title: required("title", self.title)?,
            category: required("category", self.category)?,
            description: self.description,
        })
    }
}

/// Body of `POST /api/tests/{id}/disabled`.
///
/// An empty body (or `disabled` absent) flips the flag; an explicit value
/// sets it, which is safe to retry.
#[derive(Debug, Default, Deserialize)]
pub struct SetDisabledRequest {
    pub disabled: Option<bool>,
}

impl SetDisabledRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, HttpError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| HttpError::BadRequest(format!("invalid JSON body: {e}")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLinkDto {
    pub card_id: String,
    pub title: String,
    pub url: String,
}

impl From<CardLink> for CardLinkDto {
    fn from(c: CardLink) -> Self {
        Self {
            card_id: c.card_id,
            title: c.title,
            url: c.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_title() {
        let req: CreateTestRequest =
            serde_json::from_str(r#"{"id": "TC-1", "category": "auth"}"#).unwrap();
        let err = req.into_new_test().unwrap_err();
        assert_eq!(err.kind(), "INVALID_INPUT");
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn disabled_body_is_optional() {
        assert_eq!(SetDisabledRequest::from_body(b"").unwrap().disabled, None);
        assert_eq!(SetDisabledRequest::from_body(b" \n").unwrap().disabled, None);
        assert_eq!(
            SetDisabledRequest::from_body(br#"{"disabled": true}"#)
                .unwrap()
                .disabled,
            Some(true)
        );
        let err = tokio_test::assert_err!(SetDisabledRequest::from_body(b"{nope"));
        assert_eq!(err.kind(), "INVALID_INPUT");
    }
}
