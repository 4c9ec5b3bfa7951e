//! Error types for the HTTP server.

use goimport_projects::LookupError;
use goimport_resolver::BaseUrlError;

/// Server startup error.
///
/// Discovery requests never produce errors; these only occur before the
/// server starts accepting connections or when it stops unexpectedly.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Project catalog could not be loaded.
    #[error("Failed to load project catalog: {0}")]
    Catalog(#[from] LookupError),

    /// Configured base URL is unusable.
    #[error("Invalid instance URL: {0}")]
    BaseUrl(#[from] BaseUrlError),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
