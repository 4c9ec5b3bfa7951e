//! Repository root resolution.
//!
//! A go import path such as `group/subgroup/project/pkg/util` is ambiguous
//! once groups can nest: the repository could be `group/subgroup`,
//! `group/subgroup/project` or `group/subgroup/project/pkg`. The resolver asks
//! the [`ProjectFinder`] about every interpretation in one batched call and
//! takes the most specific readable project.
//!
//! When nothing readable matches, the answer is the first two segments, the
//! same string returned when no project exists at all. A private nested
//! project therefore looks exactly like a missing one to a viewer who can't
//! read it.

use std::sync::Arc;

use goimport_projects::{ProjectFinder, Viewer};

use crate::candidates::{MIN_ROOT_SEGMENTS, candidate_paths};
use crate::classify::path_segments;

/// Resolves request paths to repository roots.
#[derive(Clone)]
pub struct PathResolver {
    finder: Arc<dyn ProjectFinder>,
}

impl PathResolver {
    /// Create a resolver backed by `finder`.
    #[must_use]
    pub fn new(finder: Arc<dyn ProjectFinder>) -> Self {
        Self { finder }
    }

    /// Resolve `path` to the repository root to advertise to `viewer`.
    ///
    /// Paths of at most two segments are returned as `namespace/project`
    /// without a lookup. A single-segment path is returned verbatim.
    ///
    /// Never fails: a lookup error is logged and answered with the same
    /// fallback as "no readable project".
    pub fn resolve_repository_root(&self, path: &str, viewer: &Viewer) -> String {
        let segments = path_segments(path);
        let normalized = segments.join("/");
        let candidates = candidate_paths(&normalized);
        // The shortest candidate is `namespace/project`; a single segment has none.
        let simple_root = candidates.last().copied().unwrap_or(normalized.as_str());

        if segments.len() <= MIN_ROOT_SEGMENTS {
            return simple_root.to_owned();
        }

        tracing::debug!(
            segments = segments.len(),
            candidates = candidates.len(),
            "Resolving nested import path"
        );

        match self.finder.find_readable(&candidates, viewer) {
            Ok(Some(project)) => project.full_path().to_owned(),
            Ok(None) => simple_root.to_owned(),
            Err(err) => {
                tracing::warn!(error = %err, "Project lookup failed, using namespace/project fallback");
                simple_root.to_owned()
            }
        }
    }
}
