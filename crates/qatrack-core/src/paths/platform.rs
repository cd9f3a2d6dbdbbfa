//! Platform data directory resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "QATRACK_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `QATRACK_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/qatrack`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if path.trim().is_empty() => return Err(PathError::EmptyOverride(DATA_DIR_ENV)),
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("qatrack"),
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
        tracing::info!(target: "qatrack.paths", path = %root.display(), "created data root");
    }

    Ok(root)
}
