//! Database path resolution.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// File name of the SQLite database inside `<data_root>/data/`.
pub const DATABASE_FILE_NAME: &str = "qatrack.db";

/// Get the path to the qatrack database file.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE_NAME))
}
