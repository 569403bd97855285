//! Command-line interface definition for Glint.
//!
//! Glint is a single-purpose tool, so the CLI is one flat argument struct
//! parsed with clap v4's derive macros: a required template path, an optional
//! data file, and server options.

use clap::Parser;
use std::path::PathBuf;

/// Glint - live-reloading preview server for a single template
#[derive(Parser, Debug)]
#[command(
    name = "glint",
    version,
    about = "A live-reloading preview server for a single template",
    long_about = "Glint serves one rendered template document, static assets next to it,\n\
                  and reloads connected browser tabs whenever the template or its data\n\
                  file changes on disk. Templates use minijinja syntax ({{ title }})."
)]
pub struct Cli {
    /// Path to the template file to preview
    ///
    /// The file is re-read on every request, so edits are visible without a
    /// restart. If the file is missing at request time the browser shows an
    /// error page instead.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// JSON data file rendered into the template
    ///
    /// Must contain a JSON object; its keys become template variables. A
    /// missing or malformed file degrades to an empty data object rather
    /// than failing the render.
    #[arg(short = 'd', long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Port to listen on
    ///
    /// If the port is busy, the next ten ports are tried before giving up.
    #[arg(short = 'p', long, default_value_t = 3111, value_name = "PORT")]
    pub port: u16,

    /// Open the preview in the default browser on start
    #[arg(long)]
    pub open: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
