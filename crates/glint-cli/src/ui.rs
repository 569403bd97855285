//! Terminal UI utilities for status messages.
//!
//! Status lines go to stdout so that the server's startup banner (bound
//! address, template path, data path) lands on the standard output stream.
//! Color support degrades gracefully when the terminal doesn't support it.

use owo_colors::OwoColorize;

/// Print a success message to stdout.
///
/// # Examples
///
/// ```no_run
/// use glint_cli::ui;
///
/// ui::success("Preview server stopped");
/// ```
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stdout.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message to stdout.
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message to stdout.
pub fn error(message: &str) {
    println!("{} {}", "✗".red().bold(), message.red());
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended()
}

/// Initialize color support based on environment.
///
/// Should be called early in the application lifecycle (e.g., in main).
/// `owo-colors` automatically respects NO_COLOR and terminal capabilities;
/// this hook exists for explicit initialization and future extensibility.
pub fn init_colors() {
    let _ = should_use_color();
}
