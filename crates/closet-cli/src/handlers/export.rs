//! Export command handler.
//!
//! Copies an entry's background-free image out of the closet.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// A directory destination keeps the entry name.
fn destination_path(dest: &Path, entry_name: &str) -> PathBuf {
    if dest.is_dir() {
        dest.join(entry_name)
    } else {
        dest.to_path_buf()
    }
}

/// Execute the export command.
///
/// # Errors
///
/// Returns an error if the entry does not exist or the destination cannot
/// be written.
pub async fn execute(ctx: &CliContext, entry_name: &str, dest: &Path) -> Result<()> {
    let bytes = ctx
        .closet()
        .asset(entry_name)
        .await
        .map_err(CliError::from)?;

    let target = destination_path(dest, entry_name);
    tokio::fs::write(&target, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("Exported {entry_name} to {}", target.display());
    Ok(())
}
