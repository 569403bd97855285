//! Preview server configuration.
//!
//! Turns parsed CLI arguments into a runnable configuration: absolute paths
//! and a bindable socket address. The template file is deliberately NOT
//! required to exist here; its absence surfaces as a render failure on the
//! next request, so a developer can start the server first and create the
//! file second.

use crate::cli::Cli;
use crate::error::{ConfigError, Result};
use crate::render::RenderRequest;
use crate::ui;
use std::net::SocketAddr;

/// Preview server configuration.
#[derive(Debug, Clone)]
pub struct DevConfig {
    /// Template and data paths, resolved to absolute form
    pub render: RenderRequest,

    /// Server socket address (IP + port)
    pub addr: SocketAddr,

    /// Open browser automatically on start
    pub open: bool,
}

impl DevConfig {
    /// Create DevConfig from CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the paths cannot be made absolute or no port in the
    /// fallback range is available
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let template_path = std::path::absolute(&cli.template)?;
        let data_path = match &cli.data {
            Some(data) => Some(std::path::absolute(data)?),
            None => None,
        };

        // Try to bind to requested port, fall back to next available
        let addr = Self::find_available_port(cli.port)?;

        Ok(Self {
            render: RenderRequest::new(template_path, data_path),
            addr,
            open: cli.open,
        })
    }

    /// Find an available port starting from the requested port.
    ///
    /// Tries the requested port first, then incrementally searches for the
    /// next available port (up to +10 from original).
    fn find_available_port(requested_port: u16) -> Result<SocketAddr> {
        use std::net::TcpListener;

        if requested_port < 1024 {
            ui::warning(&format!(
                "Port {} is in privileged range, may require root access",
                requested_port
            ));
        }

        // Try requested port first
        let addr = SocketAddr::from(([127, 0, 0, 1], requested_port));
        if TcpListener::bind(addr).is_ok() {
            return Ok(addr);
        }

        // Try next 10 ports
        for offset in 1..=10 {
            let port = requested_port.saturating_add(offset);
            let addr = SocketAddr::from(([127, 0, 0, 1], port));
            if TcpListener::bind(addr).is_ok() {
                ui::warning(&format!(
                    "Port {} is busy, using port {} instead",
                    requested_port, port
                ));
                return Ok(addr);
            }
        }

        Err(ConfigError::InvalidValue {
            field: "port".to_string(),
            value: requested_port.to_string(),
            hint: format!(
                "Ports {}-{} are all in use. Try a different port range.",
                requested_port,
                requested_port + 10
            ),
        }
        .into())
    }

    /// Get the server URL as a string.
    pub fn server_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
