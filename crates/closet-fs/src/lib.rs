//! Filesystem persistence for the garment closet.
//!
//! The closet is one flat directory. Each entry is a `*.png` file whose name
//! is the encoded record; sidecar metadata lives in a hidden `.meta/`
//! subdirectory so it never shows up as an entry.
//!
//! ```text
//! <closet dir>/
//!   Bottom_Faded-Wide-Leg-Jeans_light_1700000000000.png
//!   Top_legacy.png
//!   .meta/
//!     Bottom_Faded-Wide-Leg-Jeans_light_1700000000000.png.json
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::ClosetFactory;
pub use repositories::{FsEntryStore, META_DIR};
pub use setup::open_store;

#[cfg(test)]
use tokio_test as _;
