/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Clears the terminal and moves the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Grey out empty values, leave the rest untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
