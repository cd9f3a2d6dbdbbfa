//! Paths command handler.
//!
//! Displays resolved paths in `key = value` format for diagnostics.

use qatrack_core::paths::{DATA_DIR_ENV, data_root, database_path};

use crate::error::CliError;

pub fn execute() -> Result<(), CliError> {
    let root = data_root().map_err(|e| CliError::Io(e.to_string()))?;
    let database = database_path().map_err(|e| CliError::Io(e.to_string()))?;

    let override_note = std::env::var(DATA_DIR_ENV).map_or_else(
        |_| "(platform default)".to_string(),
        |_| format!("(from {DATA_DIR_ENV})"),
    );
    println!("data_root = {} {override_note}", root.display());
    println!("database  = {}", database.display());
    Ok(())
}
