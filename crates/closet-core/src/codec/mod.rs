//! Persisted-entry encodings.
//!
//! - `entry_name` - the filename codec. The entry name is the serialized
//!   record: `{Category}_{SanitizedName}_{contrast}_{epochMillis}.png`.
//! - `sidecar` - the JSON metadata written next to each new entry, which
//!   also carries the tags the filename cannot hold.

mod entry_name;
mod sidecar;

pub use entry_name::{
    ENTRY_EXTENSION, EntryNameFormat, UNKNOWN_ITEM_NAME, category_for_entry, decode, encode,
    is_safe_entry_name, sanitize_item_name,
};
pub use sidecar::{EntryMetadata, METADATA_VERSION};
