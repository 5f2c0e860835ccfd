//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Interpret a yes/no answer. Empty input means no; anything else is
/// `None` so the caller can re-prompt.
fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    loop {
        print!("{prompt} (y/N): ");
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .context("Failed to read user input")?;
        if read == 0 {
            // EOF: nobody is there to confirm.
            return Ok(false);
        }

        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}
