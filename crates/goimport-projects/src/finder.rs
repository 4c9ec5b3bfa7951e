//! Project finder trait and error types.
//!
//! Provides the [`ProjectFinder`] trait, the single batched lookup the path
//! resolver performs per request, along with [`LookupError`].
//!
//! # Path Convention
//!
//! Candidate paths are slash-separated project paths without a leading slash:
//! - `"acme/widgets"` - project in a top-level namespace
//! - `"acme/platform/tools"` - project in a nested group

use std::path::PathBuf;

use crate::project::Project;
use crate::viewer::Viewer;

/// Project lookup error.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Manifest file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Manifest is not valid YAML for the expected shape.
    #[error("Manifest parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Manifest parsed but its content is inconsistent.
    #[error("Invalid manifest: {0}")]
    Manifest(String),
    /// Backend could not answer the lookup.
    #[error("Project lookup unavailable: {0}")]
    Unavailable(String),
}

/// Batched project lookup with the read access check applied.
///
/// This is an authorization query, not an existence query. Implementations
/// must return only a project that `viewer` may read; a project that exists
/// but is hidden from the viewer must produce `Ok(None)`, exactly like a path
/// with no project behind it.
///
/// # Ordering
///
/// `candidates` is ordered most specific first. When several candidates name
/// readable projects, the one that appears first wins. Candidates are usually
/// prefixes of one request path and borrow from it.
pub trait ProjectFinder: Send + Sync {
    /// Find the most specific readable project among `candidates`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the backend cannot answer. Callers treat an
    /// error as "no match".
    fn find_readable(
        &self,
        candidates: &[&str],
        viewer: &Viewer,
    ) -> Result<Option<Project>, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_display() {
        let err = LookupError::Manifest("duplicate project path: acme/widgets".to_owned());
        assert_eq!(
            err.to_string(),
            "Invalid manifest: duplicate project path: acme/widgets"
        );
    }

    #[test]
    fn test_io_error_display() {
        let err = LookupError::Io {
            path: PathBuf::from("/etc/projects.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/projects.yaml"));
        assert!(msg.contains("missing"));
    }
}
