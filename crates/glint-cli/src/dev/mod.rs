//! Preview server module.
//!
//! Provides the live-reload preview server:
//! - Rendered document served fresh on every request
//! - Reload notifications via Server-Sent Events
//! - File watching on the template and data files
//! - Error page in the browser when a render fails

pub mod config;
pub mod server;
pub mod state;
pub mod watcher;

// Re-exports
pub use config::DevConfig;
pub use server::{build_router, DevServer, LIVERELOAD_PATH};
pub use state::{DevServerState, SharedState, RELOAD_EVENT};
pub use watcher::{FileWatcher, WatchEvent};

use crate::error::Result;
use crate::ui;
use std::sync::Arc;
use tokio::signal;

/// Run the preview server until ctrl-c.
///
/// # Process Flow
///
/// 1. Create shared state from the resolved configuration
/// 2. Subscribe the file watcher to the template and data files
/// 3. Start the HTTP server in a background task
/// 4. Main event loop:
///    - Broadcast a reload to connected clients on every file change
///    - Handle ctrl-c for shutdown
pub async fn run(config: DevConfig) -> Result<()> {
    let state = Arc::new(DevServerState::new(config.render.clone()));

    let (file_watcher, mut change_rx) = FileWatcher::new(&config.render.watch_targets())?;
    for path in file_watcher.watched() {
        ui::info(&format!("Watching for changes: {}", path.display()));
    }

    let server = DevServer::new(config.clone(), state.clone());
    let mut server_handle = tokio::spawn(async move {
        if let Err(e) = server.start().await {
            ui::error(&format!("Server error: {}", e));
        }
    });

    if config.open {
        open_browser(&config.server_url());
    }

    ui::info("Press Ctrl+C to stop");

    loop {
        tokio::select! {
            // File change detected
            Some(event) = change_rx.recv() => {
                let delivered = state.broadcast_reload();
                ui::info(&format!(
                    "{} changed, reloading {} client(s)",
                    event.path.display(),
                    delivered
                ));
            }

            // Ctrl+C received
            _ = signal::ctrl_c() => {
                ui::info("Shutting down preview server...");
                break;
            }

            // Server task completed (error or shutdown)
            _ = &mut server_handle => {
                ui::warning("Server task completed unexpectedly");
                break;
            }
        }
    }

    ui::success("Preview server stopped");
    Ok(())
}

/// Open the server URL in the default browser.
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Windows: `start`
/// - Linux: `xdg-open`
fn open_browser(url: &str) {
    use std::process::Command;

    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", url]).spawn()
    } else {
        Command::new("xdg-open").arg(url).spawn()
    };

    match result {
        Ok(_) => ui::info(&format!("Opened browser at {}", url)),
        Err(e) => ui::warning(&format!("Failed to open browser: {}", e)),
    }
}
