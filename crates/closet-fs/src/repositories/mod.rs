//! Entry store implementations.

mod fs_entry_store;

pub use fs_entry_store::{FsEntryStore, META_DIR};
