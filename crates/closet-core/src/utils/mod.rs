//! Shared utilities.

mod clock;

pub use clock::SystemClock;

#[cfg(test)]
pub mod testing;
