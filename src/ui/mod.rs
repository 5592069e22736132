//! User interface module - status printing and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Styled printing to the terminal

use console::style;

pub mod formatter;

pub use formatter::{format_authors_table, format_increment, format_tag, TagFormat};

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold().for_stderr(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a warning in yellow to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), message);
}
