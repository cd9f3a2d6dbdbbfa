//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Response DTOs fix the JSON field names (camelCase). Request DTOs keep
//! every field optional at the serde level and validate in `into_*`
//! methods, so a missing field becomes a precise `INVALID_INPUT` error
//! instead of a generic deserialization failure.

pub mod progress;
pub mod test_cases;
pub mod users;

pub use progress::{ProgressDto, ProgressQuery, ProgressSummaryDto, UpsertProgressRequest};
pub use test_cases::{CardLinkDto, CreateTestRequest, SetDisabledRequest, TestDto};
pub use users::UserDto;

use crate::error::HttpError;

/// Take a required field, rejecting absent or blank values.
pub(crate) fn required(field: &str, value: Option<String>) -> Result<String, HttpError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(HttpError::BadRequest(format!("{field} is required"))),
    }
}
