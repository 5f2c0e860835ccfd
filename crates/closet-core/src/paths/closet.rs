//! Closet directory resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_local_dir, normalize_user_path};

/// Environment variable naming the closet directory.
pub const CLOSET_DIR_ENV: &str = "CLOSET_DATA_DIR";

/// Default location under the platform data directory.
const DEFAULT_CLOSET_DIR_RELATIVE: &str = "closet/entries";

/// How the closet directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosetDirSource {
    /// Passed explicitly (e.g. `--closet-dir`).
    Explicit,
    /// From `CLOSET_DATA_DIR` / `.env`.
    EnvVar,
    /// Platform default.
    Default,
}

/// Resolved closet directory plus where it came from.
#[derive(Debug, Clone)]
pub struct ClosetDirResolution {
    pub path: PathBuf,
    pub source: ClosetDirSource,
}

/// `<platform data dir>/closet/entries`.
fn default_closet_dir() -> Result<PathBuf, PathError> {
    Ok(data_local_dir()?.join(DEFAULT_CLOSET_DIR_RELATIVE))
}

/// Resolve the closet directory.
///
/// Resolution order:
/// 1. Explicit path provided by caller
/// 2. `CLOSET_DATA_DIR` environment variable (ignored when blank)
/// 3. `<platform data dir>/closet/entries`
///
/// Does not touch the filesystem; see `ensure_directory`.
pub fn resolve_closet_dir(explicit: Option<&str>) -> Result<ClosetDirResolution, PathError> {
    if let Some(raw) = explicit {
        return Ok(ClosetDirResolution {
            path: normalize_user_path(raw)?,
            source: ClosetDirSource::Explicit,
        });
    }

    if let Ok(raw) = env::var(CLOSET_DIR_ENV) {
        if !raw.trim().is_empty() {
            return Ok(ClosetDirResolution {
                path: normalize_user_path(&raw)?,
                source: ClosetDirSource::EnvVar,
            });
        }
    }

    Ok(ClosetDirResolution {
        path: default_closet_dir()?,
        source: ClosetDirSource::Default,
    })
}
