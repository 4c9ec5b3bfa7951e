//! Application state.
//!
//! Shared state for the discovery middleware and request handlers.

use std::sync::Arc;

use goimport_projects::ViewerAuthenticator;
use goimport_resolver::GoImport;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Discovery pipeline (classifier, resolver, renderer).
    pub(crate) go_import: GoImport,
    /// Maps request tokens to viewers.
    pub(crate) authenticator: Arc<dyn ViewerAuthenticator>,
}
