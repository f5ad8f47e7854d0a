//! Terminal color support.
//!
//! One place for the styles used across the console output, so the palette
//! stays consistent.

use console::{style, Style};

/// Success color (green)
pub fn success() -> Style {
    Style::new().green().bold()
}

/// Error color (red)
pub fn error() -> Style {
    Style::new().red().bold()
}

/// Warning color (yellow)
pub fn warning() -> Style {
    Style::new().yellow()
}

/// Info color (cyan)
pub fn info() -> Style {
    Style::new().cyan()
}

/// Numeric values (blue)
pub fn number() -> Style {
    Style::new().blue().bold()
}

/// Separators and secondary text
pub fn dim() -> Style {
    Style::new().dim()
}

/// Prints a green success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✅").green(), success().apply_to(msg));
}

/// Prints a red error message.
pub fn print_error(msg: &str) {
    println!("{} {}", style("❌").red(), error().apply_to(msg));
}

/// Prints a yellow warning message.
pub fn print_warning(msg: &str) {
    println!("{} {}", style("⚠️").yellow(), warning().apply_to(msg));
}
