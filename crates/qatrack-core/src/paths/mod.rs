//! Path utilities for qatrack data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters report paths themselves
//! - OS-specific lookup is kept private in `platform`

mod database;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use database::{DATABASE_FILE_NAME, database_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
