//! Render pipeline: template path + optional data path → HTML.
//!
//! The pipeline re-reads the template and data files on every call, so edits
//! are visible on the next request without a restart. Rendering itself is a
//! pure function over the template source and a data object; file I/O happens
//! only in [`render_page`].

pub mod data;
pub mod error_page;
pub mod inject;

pub use data::{load_data, DataMap};
pub use error_page::{build_error_page, escape_html};
pub use inject::inject_reload_script;

use minijinja::Environment;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What to render, resolved once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Absolute path of the template file
    pub template_path: PathBuf,
    /// Absolute path of the optional JSON data file
    pub data_path: Option<PathBuf>,
}

impl RenderRequest {
    pub fn new(template_path: PathBuf, data_path: Option<PathBuf>) -> Self {
        Self {
            template_path,
            data_path,
        }
    }

    /// Directory that static assets are served from: the template's parent.
    pub fn public_dir(&self) -> &Path {
        self.template_path.parent().unwrap_or(Path::new("."))
    }

    /// Files the watcher should subscribe to.
    pub fn watch_targets(&self) -> Vec<PathBuf> {
        let mut targets = vec![self.template_path.clone()];
        if let Some(data_path) = &self.data_path {
            targets.push(data_path.clone());
        }
        targets
    }

    /// Template name used in engine diagnostics.
    fn template_name(&self) -> &str {
        self.template_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("template")
    }
}

/// A failed render, carrying a human-readable diagnostic.
///
/// Render failures never escalate: the server turns them into a 500 error
/// page and stays up for the next request.
#[derive(Debug, Error)]
#[error("{diagnostic}")]
pub struct RenderError {
    diagnostic: String,
}

impl RenderError {
    /// The full diagnostic text, engine message plus its cause chain.
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    fn from_template(err: minijinja::Error) -> Self {
        // The engine nests the interesting detail (line, expression) in the
        // source chain; flatten it into one readable block.
        let mut diagnostic = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            diagnostic.push_str("\ncaused by: ");
            diagnostic.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { diagnostic }
    }

    fn template_unreadable(path: &Path, err: &std::io::Error) -> Self {
        Self {
            diagnostic: format!("failed to read template {}: {}", path.display(), err),
        }
    }
}

/// Render template source against a data object.
///
/// Pure: no I/O, no retries, no shared state. Either a complete HTML string
/// comes back or a failure does; partial output is never leaked. A fresh
/// engine environment per call keeps renders independent of one another.
pub fn render(name: &str, source: &str, data: &DataMap) -> Result<String, RenderError> {
    let env = Environment::new();
    env.render_named_str(name, source, data)
        .map_err(RenderError::from_template)
}

/// Run the full pipeline for one document request.
///
/// Reads the template (its absence is a render failure, not a crash), loads
/// the data object (which never fails), and renders.
pub async fn render_page(request: &RenderRequest) -> Result<String, RenderError> {
    let source = tokio::fs::read_to_string(&request.template_path)
        .await
        .map_err(|err| RenderError::template_unreadable(&request.template_path, &err))?;

    let data = load_data(request.data_path.as_deref()).await;
    render(request.template_name(), &source, &data)
}
