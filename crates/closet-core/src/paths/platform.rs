//! Platform lookups kept private to the `paths` module.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Platform data directory (e.g. `~/.local/share` on Linux).
pub(super) fn data_local_dir() -> Result<PathBuf, PathError> {
    dirs::data_local_dir().ok_or(PathError::NoDataDir)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = match trimmed.strip_prefix('~') {
        Some("") => dirs::home_dir().ok_or(PathError::NoHomeDir)?,
        Some(rest) if rest.starts_with('/') => dirs::home_dir()
            .ok_or(PathError::NoHomeDir)?
            .join(rest.trim_start_matches('/')),
        _ => PathBuf::from(trimmed),
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
