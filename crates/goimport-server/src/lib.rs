//! HTTP server answering go-import discovery requests.
//!
//! This crate provides a native Rust HTTP server using axum. A middleware in
//! front of the router answers every `?go-get=1` request with a go-import
//! document; everything else reaches the downstream routes:
//! - `GET /-/health` liveness check
//! - 404 for any other path
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use goimport_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         base_url: "https://example.com".to_owned(),
//!         catalog_path: PathBuf::from("projects.yaml"),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! go get ──HTTP──► axum server (goimport-server)
//!                        │
//!                        ├─► go-import middleware ──► GoImport (goimport-resolver)
//!                        │                               │
//!                        │                               └─► ProjectFinder (goimport-projects)
//!                        │
//!                        └─► downstream routes (health, 404)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use goimport_projects::{ProjectCatalog, ProjectFinder, ViewerAuthenticator};
use goimport_resolver::{BaseUrl, GoImport};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Instance base URL used in go-import documents.
    pub base_url: String,
    /// Project catalog manifest.
    pub catalog_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            base_url: "http://localhost".to_owned(),
            catalog_path: PathBuf::from("projects.yaml"),
        }
    }
}

/// Build the router around explicit collaborators.
///
/// Useful for embedding the endpoint with a finder other than the bundled
/// catalog.
pub fn router(
    finder: Arc<dyn ProjectFinder>,
    authenticator: Arc<dyn ViewerAuthenticator>,
    base_url: BaseUrl,
) -> Router {
    let state = Arc::new(AppState {
        go_import: GoImport::new(finder, base_url),
        authenticator,
    });
    app::create_router(state)
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the catalog or base URL is invalid, or the server
/// fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let catalog = Arc::new(ProjectCatalog::load(&config.catalog_path)?);
    let base_url = BaseUrl::parse(&config.base_url)?;
    tracing::info!(
        projects = catalog.project_count(),
        users = catalog.user_count(),
        base_url = %base_url,
        "Loaded project catalog"
    );

    let app = router(
        Arc::clone(&catalog) as Arc<dyn ProjectFinder>,
        catalog,
        base_url,
    );

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let address = listener.local_addr()?;
    tracing::info!(address = %address, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the loaded config file.
///
/// # Arguments
///
/// * `config` - Loaded configuration
#[must_use]
pub fn server_config_from_config(config: &goimport_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        base_url: config.instance.url.clone(),
        catalog_path: config.catalog_path.clone(),
    }
}
