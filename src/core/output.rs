//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Every workflow prints through these helpers so messages share one look: red cross for
//! errors, green check for success, yellow cross when the cache is out of date, and
//! indented muted lines for file paths and details.

use colored::*;
use std::path::Path;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message
///
/// # Format
/// ```text
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message.white());
}

/// Formats and prints a warning that needs the operator's attention
///
/// # Format
/// ```text
/// ✗ <message>
/// ```
pub fn print_warning(message: &str) {
    println!("{} {}", "✗".yellow(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("{}", message.white());
}

/// Formats and prints a section header followed by an underline of matching width
///
/// # Format
/// ```text
/// <header>
/// ========
/// ```
pub fn print_section_header(header: &str) {
    println!("{}", header.white());
    println!("{}", "=".repeat(header.chars().count()).bright_black());
}

/// Prints one cached file path, indented under a section header
pub fn print_path(path: &Path) {
    println!("  {}", path.display().to_string().blue());
}

/// Prints a labelled detail line, e.g. `  Local HEAD:  1a2b3c4d`
pub fn print_detail(label: &str, value: &str) {
    println!("  {} {}", label.bright_black(), value.white());
}

/// Prints a muted hint line
pub fn print_hint(message: &str) {
    println!("  {}", message.bright_black());
}
