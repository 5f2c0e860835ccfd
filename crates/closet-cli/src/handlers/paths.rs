//! Paths command handler.
//!
//! Prints the resolved closet directory and where it came from.

use closet_core::{CLOSET_DIR_ENV, ClosetDirSource};

use crate::bootstrap::CliContext;

fn source_label(source: ClosetDirSource) -> String {
    match source {
        ClosetDirSource::Explicit => "--closet-dir".to_string(),
        ClosetDirSource::EnvVar => CLOSET_DIR_ENV.to_string(),
        ClosetDirSource::Default => "default".to_string(),
    }
}

/// Execute the paths command, printing `key = value` lines.
pub fn execute(ctx: &CliContext) {
    println!("closet_dir = {}", ctx.closet_dir().display());
    println!("closet_dir_source = {}", source_label(ctx.dir_source()));
}
