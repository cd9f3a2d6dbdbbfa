//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers: extract, delegate to `AppCore`, convert to a DTO.

pub mod progress;
pub mod test_cases;
pub mod users;
