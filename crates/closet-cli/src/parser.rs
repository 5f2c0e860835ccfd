//! Root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Capture, classify and organize garments into a digital closet.
#[derive(Parser)]
#[command(name = "closet")]
#[command(about = "Capture garments into a digital closet")]
#[command(version)]
pub struct Cli {
    /// Closet directory for this invocation
    #[arg(long = "closet-dir", env = "CLOSET_DATA_DIR", global = true)]
    pub closet_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
