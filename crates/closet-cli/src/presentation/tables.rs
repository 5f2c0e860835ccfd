//! Table formatting utilities for CLI output.

/// Truncates a string to at most `max_len` characters, adding "..." if
/// needed.
///
/// # Examples
///
/// ```rust
/// use closet_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_string("Crème Brûlée Cardigan", 10), "Crème B...");
        assert_eq!(truncate_string("Tee", 3), "Tee");
    }
}
