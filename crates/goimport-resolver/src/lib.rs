//! go-import discovery for nested project paths.
//!
//! `go get example.com/group/subgroup/project/pkg` first fetches
//! `https://example.com/group/subgroup/project/pkg?go-get=1` and expects an
//! HTML page with a `go-import` meta tag naming the repository root. This
//! crate answers that request in three steps:
//!
//! 1. [`is_discovery_request`] decides whether the request is in scope
//! 2. [`PathResolver`] maps the path to a repository root, consulting a
//!    [`ProjectFinder`] once per request
//! 3. [`DocumentRenderer`] formats the meta tag against the configured base URL
//!
//! [`GoImport`] chains the three and returns a transport-agnostic
//! [`DiscoveryResponse`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use goimport_projects::{Project, ProjectCatalog, Viewer, Visibility};
//! use goimport_resolver::{BaseUrl, DiscoveryRequest, GoImport};
//!
//! let catalog = ProjectCatalog::new()
//!     .with_project(Project::new("acme/widgets", Visibility::Public));
//! let go_import = GoImport::new(Arc::new(catalog), BaseUrl::parse("https://example.com")?);
//!
//! let request = DiscoveryRequest::from_query("/acme/widgets/util", Some("go-get=1"), Viewer::Anonymous);
//! let response = go_import.respond(&request).expect("discovery request");
//! assert_eq!(response.status, 200);
//! ```

mod candidates;
mod classify;
mod document;
mod resolve;

use std::sync::Arc;

use goimport_projects::ProjectFinder;

pub use candidates::{MIN_ROOT_SEGMENTS, candidate_paths};
pub use classify::{DiscoveryRequest, GO_GET_PARAM, is_discovery_request};
pub use document::{BaseUrl, BaseUrlError, DocumentRenderer};
pub use resolve::PathResolver;

/// Content type of the discovery document.
pub const CONTENT_TYPE: &str = "text/html";

/// Response to a discovery request.
///
/// Always `200 text/html`, whether or not the path matched a readable project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Content-Type` header.
    pub content_type: &'static str,
    /// Rendered document.
    pub body: String,
}

/// Classifier, resolver and renderer wired together.
#[derive(Clone)]
pub struct GoImport {
    resolver: PathResolver,
    renderer: DocumentRenderer,
}

impl GoImport {
    /// Create the discovery pipeline.
    #[must_use]
    pub fn new(finder: Arc<dyn ProjectFinder>, base_url: BaseUrl) -> Self {
        Self {
            resolver: PathResolver::new(finder),
            renderer: DocumentRenderer::new(base_url),
        }
    }

    /// Answer `request`, or return `None` if it is not a discovery request
    /// and should go to the downstream application.
    pub fn respond(&self, request: &DiscoveryRequest) -> Option<DiscoveryResponse> {
        if !is_discovery_request(request) {
            return None;
        }

        let root = self
            .resolver
            .resolve_repository_root(request.path(), request.viewer());
        tracing::debug!(path = request.path(), root = %root, "Answering go-import request");

        Some(DiscoveryResponse {
            status: 200,
            content_type: CONTENT_TYPE,
            body: self.renderer.render(&root),
        })
    }
}
