//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod garment_display;
pub mod tables;

pub use garment_display::{display_entry_summary, display_listing, format_created_at};
pub use tables::{print_separator, truncate_string};
