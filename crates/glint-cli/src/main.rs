//! Glint CLI - live-reloading preview server for a single template.
//!
//! Entry point: parses arguments, initializes logging, and runs the preview
//! server until interrupted.

use clap::Parser;
use glint_cli::{cli, dev, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    // Resolve configuration; failures here are the only fatal ones
    let config = dev::DevConfig::from_cli(&args).map_err(error::cli_error_to_miette)?;

    // Serve until ctrl-c
    dev::run(config).await.map_err(error::cli_error_to_miette)
}
