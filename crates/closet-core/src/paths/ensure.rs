//! Directory creation and verification.
//!
//! `DirectoryCreationStrategy` has no interactive variant; the CLI decides
//! before calling in.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::error::PathError;

/// What to do when the closet directory is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// Create the directory (and parents).
    #[default]
    AutoCreate,
    /// Report `DirectoryNotFound`.
    Disallow,
}

/// Ensure `path` exists as a writable directory.
pub fn ensure_directory(path: &Path, strategy: DirectoryCreationStrategy) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else {
        match strategy {
            DirectoryCreationStrategy::AutoCreate => {
                fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
                tracing::debug!(path = %path.display(), "Created closet directory");
            }
            DirectoryCreationStrategy::Disallow => {
                return Err(PathError::DirectoryNotFound(path.to_path_buf()));
            }
        }
    }

    verify_writable(path)
}

/// Verify a directory is writable by creating and removing a probe file.
///
/// The probe is hidden, so a concurrent listing never reports it as an entry.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let probe = path.join(format!(".closet_write_probe_{}", std::process::id()));
    let not_writable = |e: std::io::Error| PathError::NotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&probe)
        .map_err(not_writable)?;
    let written = file.write_all(b"probe");
    drop(file);
    let _ = fs::remove_file(&probe);
    written.map_err(not_writable)
}
