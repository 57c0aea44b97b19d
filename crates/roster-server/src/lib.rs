pub mod error;
pub mod logging;
pub mod response;
pub mod routes;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use roster_adapter_file::{DEFAULT_ROSTER_PATH, FileRoster};
use roster_core::RosterSource;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Configuration for the roster HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub data_path: PathBuf,
    /// Reuse the parsed file until it changes on disk.
    pub cache: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            data_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            cache: false,
        }
    }
}

impl ServerConfig {
    /// The file-backed source described by this configuration.
    pub fn roster_source(&self) -> FileRoster {
        let source = FileRoster::new(&self.data_path);
        if self.cache { source.with_cache() } else { source }
    }
}

/// Build the Axum router with all routes and middleware.
///
/// Cross-origin GETs are simple requests, so the only CORS header needed is
/// `Access-Control-Allow-Origin`. Preflight `OPTIONS` requests are not
/// answered here and reach the handlers like any other non-GET method.
pub fn build_router(source: Arc<dyn RosterSource>) -> Router {
    let state = AppState { source };

    let allow_origin = SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    routes::build_routes(state)
        .layer(allow_origin)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server and block until shutdown.
pub async fn start_server(config: ServerConfig) -> std::io::Result<()> {
    let source = config.roster_source();
    let router = build_router(Arc::new(source));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        addr = %addr,
        data = %config.data_path.display(),
        cache = config.cache,
        "roster server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("shutting down");
}
