//! List command handler.
//!
//! Shows the closet split into tops and bottoms, oldest first.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_listing;

/// Execute the list command.
///
/// With `json` the listing is printed as a single JSON document with
/// `tops` and `bottoms` arrays.
///
/// # Errors
///
/// Returns an error if the closet directory cannot be read.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let listing = ctx.closet().list().await.map_err(CliError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(listing.as_ref())?);
        return Ok(());
    }

    if listing.is_empty() {
        println!("Your closet is empty.");
        println!("Use 'closet capture <photo>' to add your first garment.");
        return Ok(());
    }

    display_listing(&listing);
    Ok(())
}
