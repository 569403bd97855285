//! Preview server with live reload via Server-Sent Events.
//!
//! Serves the rendered document, static assets next to the template, and the
//! SSE endpoint that pushes reload notifications. Every response disables
//! caching; this server exists to show the latest state of files on disk.

use crate::dev::state::SharedState;
use crate::dev::DevConfig;
use crate::error::{CliError, Result};
use crate::render::{build_error_page, inject_reload_script, render_page};
use crate::ui;
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::sse::{Event, KeepAlive},
    response::{IntoResponse, Response, Sse},
    routing::get,
    Router,
};
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::{wrappers::ReceiverStream, StreamExt};
use tower_http::cors::{Any, CorsLayer};

/// Well-known path of the reload notification channel. The injected browser
/// fragment opens its EventSource here.
pub const LIVERELOAD_PATH: &str = "/__livereload";

/// Preview server.
pub struct DevServer {
    /// Server configuration
    config: DevConfig,
    /// Shared state: render request + client registry
    state: SharedState,
}

impl DevServer {
    pub fn new(config: DevConfig, state: SharedState) -> Self {
        Self { config, state }
    }

    /// Bind the listener, print the startup banner, and serve until the
    /// process shuts down.
    ///
    /// # Errors
    ///
    /// Returns error if the server cannot bind to the configured address
    pub async fn start(self) -> Result<()> {
        let addr = self.config.addr;
        let server_url = self.config.server_url();
        let render = self.state.render.clone();

        let app = build_router(self.state);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| CliError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

        ui::success(&format!("Preview server running at {}", server_url));
        ui::info(&format!("Template: {}", render.template_path.display()));
        if let Some(data_path) = &render.data_path {
            ui::info(&format!("Data:     {}", data_path.display()));
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| CliError::Server(format!("Server error: {}", e)))?;

        Ok(())
    }
}

/// Build the axum router with all routes.
///
/// - SSE endpoint for reload notifications
/// - The rendered document on `/` and `/index.html`
/// - Static assets from the template's directory on any other path
/// - CORS headers (allow all origins for dev)
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route(LIVERELOAD_PATH, get(handle_livereload))
        .route("/", get(handle_document))
        .route("/index.html", get(handle_document))
        .fallback(handle_static)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Handle SSE connections for reload notifications.
///
/// Registers the connection and holds it open until the client goes away.
/// Stale registrations are swept on the next failed broadcast; the periodic
/// keep-alive ping makes the transport notice dead peers in between.
async fn handle_livereload(State(state): State<SharedState>) -> impl IntoResponse {
    let (id, rx) = state.register_client();
    tracing::debug!("live-reload client {} connected", id);

    // An initial comment frame opens the channel promptly, before the first
    // broadcast has anything to say.
    let opening = tokio_stream::once(Ok::<_, Infallible>(Event::default().comment("connected")));
    let frames = ReceiverStream::new(rx).map(|data| Ok::<_, Infallible>(Event::default().data(data)));

    (
        [(header::CACHE_CONTROL, "no-cache")],
        Sse::new(opening.chain(frames)).keep_alive(
            KeepAlive::new()
                .interval(Duration::from_secs(15))
                .text("ping"),
        ),
    )
}

/// Handle a document request: render fresh from disk.
///
/// Success and failure both come back as HTML with the reload fragment
/// injected, so a broken template recovers in the browser as soon as it is
/// fixed and saved.
async fn handle_document(State(state): State<SharedState>) -> Response {
    match render_page(&state.render).await {
        Ok(html) => html_response(StatusCode::OK, inject_reload_script(&html)),
        Err(err) => {
            tracing::debug!("render failed: {}", err);
            let page = build_error_page(err.diagnostic());
            html_response(StatusCode::INTERNAL_SERVER_ERROR, inject_reload_script(&page))
        }
    }
}

/// Handle all other requests: static assets beside the template.
async fn handle_static(State(state): State<SharedState>, uri: Uri) -> Response {
    let path = uri.path();
    let file_path = state.render.public_dir().join(path.trim_start_matches('/'));

    if file_path.is_file() {
        match tokio::fs::read(&file_path).await {
            Ok(content) => {
                return Response::builder()
                    .status(StatusCode::OK)
                    .header(header::CONTENT_TYPE, determine_content_type(path))
                    .header(header::CACHE_CONTROL, "no-cache")
                    .body(Body::from(content))
                    .unwrap();
            }
            Err(e) => {
                ui::warning(&format!(
                    "Failed to read file {}: {}",
                    file_path.display(),
                    e
                ));
            }
        }
    }

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(format!("File not found: {}", path)))
        .unwrap()
}

fn html_response(status: StatusCode, html: String) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(html))
        .unwrap()
}

/// Determine content type from file extension.
fn determine_content_type(path: &str) -> &'static str {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    match extension {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" | "mjs" => "application/javascript",
        "json" => "application/json",
        "map" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "wasm" => "application/wasm",
        _ => "application/octet-stream",
    }
}
