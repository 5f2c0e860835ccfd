//! Remove command handler.
//!
//! Deletes one entry (and its metadata) from the closet directory.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_created_at;
use crate::utils::input;

/// Execute the remove command.
///
/// Confirms with the user unless `force` is set. An unknown entry is
/// reported and is not an error.
///
/// # Errors
///
/// Returns an error if reading input fails or the entry cannot be deleted.
pub async fn execute(ctx: &CliContext, entry_name: &str, force: bool) -> Result<()> {
    let listing = ctx.closet().list().await.map_err(CliError::from)?;
    let Some(entry) = listing.get(entry_name) else {
        println!("No closet entry named '{entry_name}'.");
        println!("Use 'closet list' to see entries.");
        return Ok(());
    };

    if !force {
        println!(
            "{} ({}, added {})",
            entry.item_name,
            entry.contrast_mode.as_tag(),
            format_created_at(entry.created_at)
        );
        let confirm = input::prompt_confirmation("Remove this garment from your closet?")?;
        if !confirm {
            println!("Remove cancelled.");
            return Ok(());
        }
    }

    let remaining = ctx
        .closet()
        .delete(entry_name)
        .await
        .map_err(CliError::from)?;
    println!(
        "Removed '{entry_name}'. {} top(s) and {} bottom(s) left.",
        remaining.tops.len(),
        remaining.bottoms.len()
    );
    Ok(())
}
