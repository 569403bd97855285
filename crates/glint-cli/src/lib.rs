//! Glint - live-reloading preview server for a single template.
//!
//! Glint renders one template document on every request, serves the static
//! assets sitting next to it, and reloads connected browser tabs when the
//! template or its JSON data file changes on disk.
//!
//! # Architecture
//!
//! - [`render`] - the pure render pipeline: template + data → HTML or a
//!   diagnostic error page, plus reload-script injection
//! - [`dev`] - the server: axum router, SSE client registry, file watcher
//! - [`error`] - structured error types; only configuration errors are fatal
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - colored terminal status messages
//!
//! The design is deliberately cache-free: every document request re-reads the
//! template and data files, so edits are always visible without a restart.

// Public modules
pub mod cli;
pub mod dev;
pub mod error;
pub mod logger;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result};
