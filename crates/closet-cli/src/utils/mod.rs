//! Utility modules for the CLI.

pub mod input;
pub mod still;

pub use still::FileStill;
