//! Command handlers that delegate to the closet services.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that validate CLI input, call the service, and format
//!   output for the terminal
//!
//! Handlers should NOT touch the entry store directly.

pub mod capture;
pub mod export;
pub mod list;
pub mod paths;
pub mod remove;
