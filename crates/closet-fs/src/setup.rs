//! Store setup.
//!
//! Entry points call `open_store` with the resolved closet directory.

use std::path::Path;

use anyhow::{Context, Result};
use closet_core::{DirectoryCreationStrategy, ensure_directory};
use tracing::debug;

use crate::repositories::FsEntryStore;

/// Open the entry store at `dir`, creating the directory if `strategy`
/// allows it and verifying it is writable.
///
/// # Example
///
/// ```rust,no_run
/// use closet_core::DirectoryCreationStrategy;
/// use closet_fs::open_store;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let store = open_store(Path::new("/tmp/closet"), DirectoryCreationStrategy::AutoCreate)?;
/// # Ok(())
/// # }
/// ```
pub fn open_store(dir: &Path, strategy: DirectoryCreationStrategy) -> Result<FsEntryStore> {
    ensure_directory(dir, strategy)
        .with_context(|| format!("closet directory {} is not usable", dir.display()))?;
    debug!(path = %dir.display(), "Opened closet store");
    Ok(FsEntryStore::new(dir))
}
