//! CLI error types.

use goimport_config::ConfigError;
use goimport_projects::LookupError;
use goimport_resolver::BaseUrlError;
use goimport_server::ServerError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Catalog(#[from] LookupError),

    #[error("Invalid instance URL: {0}")]
    BaseUrl(#[from] BaseUrlError),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("{0}")]
    Validation(String),
}
