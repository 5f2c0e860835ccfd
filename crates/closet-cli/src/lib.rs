//! `closet` command-line interface.
//!
//! `bootstrap` is the composition root; handlers receive a `CliContext`
//! and never build infrastructure themselves.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used only by the binary target
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, ServiceArgs};
pub use error::CliError;
pub use parser::Cli;
