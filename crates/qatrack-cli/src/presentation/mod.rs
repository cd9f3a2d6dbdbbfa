//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain rules.

pub mod tables;

pub use tables::{format_optional, format_timestamp, print_separator, truncate_string};
