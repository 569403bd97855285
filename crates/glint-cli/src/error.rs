//! Error handling for the Glint CLI.
//!
//! A small hierarchical error system built on `thiserror`. Startup
//! (configuration) failures are the only fatal errors; everything reachable
//! during request handling is converted into an HTTP response instead.
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`) carry detailed context and hints
//! - **Error conversion** is automatic via `#[from]` attributes

use thiserror::Error;

/// Top-level CLI error type.
///
/// This is the primary error type returned from startup and the run loop. It
/// automatically converts from domain-specific errors via `From`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (invalid paths, unusable port, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Preview server errors (bind failure, serve loop failure)
    #[error("Server error: {0}")]
    Server(String),

    /// File watching errors
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
///
/// These occur while turning CLI arguments into a runnable server
/// configuration. Each variant carries a hint on how to resolve it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a `CliError` to a miette `Report` for terminal-friendly output.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "port".to_string(),
            value: "3111".to_string(),
            hint: "Try a different port range".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'port'"));
        assert!(msg.contains("3111"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            field: "port".to_string(),
            value: "0".to_string(),
            hint: "hint".to_string(),
        };
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_cli_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io(_)));
    }

    #[test]
    fn test_miette_report_keeps_message() {
        let err = CliError::Server("bind failed".to_string());
        let report = cli_error_to_miette(err);
        assert!(format!("{}", report).contains("bind failed"));
    }
}
