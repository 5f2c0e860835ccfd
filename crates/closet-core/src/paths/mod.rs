//! Path utilities for the closet directory.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - the CLI handles prompts separately
//! - OS-specific lookups stay private in `platform`

mod closet;
mod ensure;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use closet::{CLOSET_DIR_ENV, ClosetDirResolution, ClosetDirSource, resolve_closet_dir};
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
pub use error::PathError;
