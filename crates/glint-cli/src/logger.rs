//! Logging infrastructure for the Glint CLI.
//!
//! Structured logging on the `tracing` ecosystem with verbosity flags and
//! environment-based overrides.
//!
//! # Verbosity Levels
//!
//! The logging level is determined in this order:
//! 1. `--verbose` flag: DEBUG for glint crates
//! 2. `--quiet` flag: errors only
//! 3. `RUST_LOG` environment variable: custom filter
//! 4. Default: INFO for glint crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable colored output
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("glint=debug,glint_cli=debug")
    } else if quiet {
        EnvFilter::new("glint=error,glint_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("glint=info,glint_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so these
    // tests only exercise filter construction.

    #[test]
    fn test_env_filter_verbose() {
        let _filter = EnvFilter::new("glint=debug,glint_cli=debug");
    }

    #[test]
    fn test_env_filter_quiet() {
        let _filter = EnvFilter::new("glint=error,glint_cli=error");
    }
}
