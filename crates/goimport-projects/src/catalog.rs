//! In-memory project catalog.
//!
//! Provides [`ProjectCatalog`], a [`ProjectFinder`] and [`ViewerAuthenticator`]
//! backed by hash maps. Catalogs are either assembled with builder methods or
//! loaded from a YAML manifest:
//!
//! ```yaml
//! users:
//!   - username: alice
//!     token: glpat-alice
//! projects:
//!   - path: acme/widgets
//!     visibility: public
//!   - path: acme/platform/tools
//!     visibility: private
//!     members:
//!       alice: developer
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::finder::{LookupError, ProjectFinder};
use crate::project::{AccessLevel, Project, Visibility, can_read_project};
use crate::viewer::{Viewer, ViewerAuthenticator};

/// Manifest file layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    users: Vec<UserEntry>,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserEntry {
    username: String,
    token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectEntry {
    path: String,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    members: BTreeMap<String, AccessLevel>,
}

/// Project catalog held in memory.
///
/// Project paths are matched ASCII case-insensitively; lookups return the
/// project with the casing it was registered with.
///
/// # Example
///
/// ```ignore
/// use goimport_projects::{AccessLevel, Project, ProjectCatalog, Visibility};
///
/// let catalog = ProjectCatalog::new()
///     .with_user("alice", "glpat-alice")
///     .with_project(
///         Project::new("acme/platform/tools", Visibility::Private)
///             .with_member("alice", AccessLevel::Developer),
///     );
/// ```
#[derive(Debug, Default)]
pub struct ProjectCatalog {
    projects: HashMap<String, Project>,
    tokens: HashMap<String, String>,
    /// Byte length of the longest registered path; longer candidates can't match.
    longest_path: usize,
}

impl ProjectCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project, replacing any project with the same path.
    #[must_use]
    pub fn with_project(mut self, project: Project) -> Self {
        self.insert_project(project);
        self
    }

    /// Register a user and the token that authenticates them.
    #[must_use]
    pub fn with_user(mut self, username: impl Into<String>, token: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), username.into());
        self
    }

    /// Load a catalog from a YAML manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the file can't be read or its content is
    /// invalid (see [`ProjectCatalog::from_manifest_str`]).
    pub fn load(path: &Path) -> Result<Self, LookupError> {
        let content = std::fs::read_to_string(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_manifest_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            projects = catalog.project_count(),
            users = catalog.user_count(),
            "Loaded project catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from YAML manifest text.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Parse`] for malformed YAML and
    /// [`LookupError::Manifest`] for project paths with fewer than two
    /// segments, empty segments, duplicate project paths, or duplicate tokens.
    pub fn from_manifest_str(content: &str) -> Result<Self, LookupError> {
        let manifest: Manifest = serde_yaml::from_str(content)?;
        let mut catalog = Self::new();

        for user in manifest.users {
            if user.username.is_empty() || user.token.is_empty() {
                return Err(LookupError::Manifest(
                    "users need a non-empty username and token".to_owned(),
                ));
            }
            if catalog.tokens.contains_key(&user.token) {
                return Err(LookupError::Manifest(format!(
                    "duplicate token for user {}",
                    user.username
                )));
            }
            catalog.tokens.insert(user.token, user.username);
        }

        for entry in manifest.projects {
            validate_project_path(&entry.path)?;
            if catalog.projects.contains_key(&path_key(&entry.path)) {
                return Err(LookupError::Manifest(format!(
                    "duplicate project path: {}",
                    entry.path
                )));
            }

            let project = entry
                .members
                .into_iter()
                .fold(Project::new(entry.path, entry.visibility), |p, (name, level)| {
                    p.with_member(name, level)
                });
            catalog.warn_unknown_members(&project);
            catalog.insert_project(project);
        }

        Ok(catalog)
    }

    /// Number of registered projects.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Number of registered user tokens.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.tokens.len()
    }

    fn insert_project(&mut self, project: Project) {
        self.longest_path = self.longest_path.max(project.full_path().len());
        self.projects.insert(path_key(project.full_path()), project);
    }

    fn warn_unknown_members(&self, project: &Project) {
        for member in project.members() {
            if !self.tokens.values().any(|name| name == member) {
                tracing::warn!(
                    project = project.full_path(),
                    member,
                    "Project member has no token in the manifest"
                );
            }
        }
    }
}

impl ProjectFinder for ProjectCatalog {
    fn find_readable(
        &self,
        candidates: &[&str],
        viewer: &Viewer,
    ) -> Result<Option<Project>, LookupError> {
        Ok(candidates
            .iter()
            .filter(|candidate| candidate.len() <= self.longest_path)
            .filter_map(|candidate| self.projects.get(&path_key(candidate)))
            .find(|project| can_read_project(viewer, project))
            .cloned())
    }
}

impl ViewerAuthenticator for ProjectCatalog {
    fn authenticate(&self, token: &str) -> Viewer {
        self.tokens
            .get(token)
            .map_or(Viewer::Anonymous, |name| Viewer::user(name.clone()))
    }
}

/// Lookup key for a project path.
fn path_key(path: &str) -> String {
    path.to_ascii_lowercase()
}

/// Require `namespace/project` shape with no empty segments.
fn validate_project_path(path: &str) -> Result<(), LookupError> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
        return Err(LookupError::Manifest(format!(
            "project path must be namespace/project without empty segments: {path:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_catalog_is_send_sync() {
        assert_send_sync::<ProjectCatalog>();
    }

    #[test]
    fn test_new_empty() {
        let catalog = ProjectCatalog::new();
        let found = catalog
            .find_readable(&["a/b/c", "a/b"], &Viewer::Anonymous)
            .unwrap();

        assert!(found.is_none());
        assert_eq!(catalog.project_count(), 0);
    }

    #[test]
    fn test_first_readable_candidate_wins() {
        let catalog = ProjectCatalog::new()
            .with_project(Project::new("a/b", Visibility::Public))
            .with_project(Project::new("a/b/c", Visibility::Public));

        let found = catalog
            .find_readable(&["a/b/c/d", "a/b/c", "a/b"], &Viewer::Anonymous)
            .unwrap()
            .unwrap();

        assert_eq!(found.full_path(), "a/b/c");
    }

    #[test]
    fn test_unreadable_project_is_skipped() {
        let catalog = ProjectCatalog::new()
            .with_project(Project::new("group/subgroup/project", Visibility::Private));

        let found = catalog
            .find_readable(
                &["group/subgroup/project/sub", "group/subgroup/project", "group/subgroup"],
                &Viewer::Anonymous,
            )
            .unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn test_unreadable_specific_falls_to_readable_ancestor() {
        let catalog = ProjectCatalog::new()
            .with_project(Project::new("a/b", Visibility::Public))
            .with_project(Project::new("a/b/c", Visibility::Private));

        let found = catalog
            .find_readable(&["a/b/c", "a/b"], &Viewer::Anonymous)
            .unwrap()
            .unwrap();

        assert_eq!(found.full_path(), "a/b");
    }

    #[test]
    fn test_member_sees_private_project() {
        let catalog = ProjectCatalog::new().with_project(
            Project::new("a/b/c", Visibility::Private).with_member("alice", AccessLevel::Reporter),
        );

        let found = catalog
            .find_readable(&["a/b/c", "a/b"], &Viewer::user("alice"))
            .unwrap();

        assert_eq!(found.map(|p| p.full_path().to_owned()), Some("a/b/c".to_owned()));
    }

    #[test]
    fn test_match_is_case_insensitive_and_returns_canonical_path() {
        let catalog =
            ProjectCatalog::new().with_project(Project::new("Acme/Platform/Tools", Visibility::Public));

        let found = catalog
            .find_readable(&["acme/platform/tools", "acme/platform"], &Viewer::Anonymous)
            .unwrap()
            .unwrap();

        assert_eq!(found.full_path(), "Acme/Platform/Tools");
    }

    #[test]
    fn test_deep_candidates_past_longest_project_are_skipped() {
        let catalog = ProjectCatalog::new().with_project(Project::new("a/a/a", Visibility::Public));
        let path = "a/".repeat(30_000) + "a";
        let candidates: Vec<&str> = (5..=path.len()).rev().step_by(2).map(|end| &path[..end]).collect();

        let found = catalog
            .find_readable(&candidates, &Viewer::Anonymous)
            .unwrap()
            .unwrap();

        assert_eq!(found.full_path(), "a/a/a");
    }

    #[test]
    fn test_case_change_keeps_length_cutoff() {
        let catalog = ProjectCatalog::new().with_project(Project::new("Acme/Tools", Visibility::Public));

        let found = catalog
            .find_readable(&["ACME/TOOLS/cmd", "ACME/TOOLS"], &Viewer::Anonymous)
            .unwrap();

        assert_eq!(found.map(|p| p.full_path().to_owned()), Some("Acme/Tools".to_owned()));
    }

    #[test]
    fn test_authenticate() {
        let catalog = ProjectCatalog::new().with_user("alice", "glpat-alice");

        assert_eq!(catalog.authenticate("glpat-alice"), Viewer::user("alice"));
        assert_eq!(catalog.authenticate("nope"), Viewer::Anonymous);
        assert_eq!(catalog.authenticate(""), Viewer::Anonymous);
    }

    #[test]
    fn test_from_manifest_str() {
        let yaml = r"
users:
  - username: alice
    token: glpat-alice
projects:
  - path: acme/widgets
    visibility: public
  - path: acme/platform/tools
    members:
      alice: master
";
        let catalog = ProjectCatalog::from_manifest_str(yaml).unwrap();

        assert_eq!(catalog.project_count(), 2);
        assert_eq!(catalog.user_count(), 1);

        let tools = ["acme/platform/tools"];
        assert!(
            catalog
                .find_readable(&tools, &Viewer::Anonymous)
                .unwrap()
                .is_none()
        );
        let viewer = catalog.authenticate("glpat-alice");
        let found = catalog.find_readable(&tools, &viewer).unwrap().unwrap();
        assert_eq!(found.visibility(), Visibility::Private);
        assert_eq!(found.access_level_for(&viewer), Some(AccessLevel::Maintainer));
    }

    #[test]
    fn test_from_manifest_str_empty_document() {
        let catalog = ProjectCatalog::from_manifest_str("{}").unwrap();
        assert_eq!(catalog.project_count(), 0);
        assert_eq!(catalog.user_count(), 0);
    }

    #[test]
    fn test_from_manifest_rejects_single_segment_path() {
        let yaml = "projects:\n  - path: acme\n";
        let err = ProjectCatalog::from_manifest_str(yaml).unwrap_err();
        assert!(matches!(err, LookupError::Manifest(_)));
        assert!(err.to_string().contains("acme"));
    }

    #[test]
    fn test_from_manifest_rejects_empty_segment() {
        let yaml = "projects:\n  - path: acme//widgets\n";
        let err = ProjectCatalog::from_manifest_str(yaml).unwrap_err();
        assert!(matches!(err, LookupError::Manifest(_)));
    }

    #[test]
    fn test_from_manifest_rejects_duplicate_path() {
        let yaml = "projects:\n  - path: acme/widgets\n  - path: ACME/widgets\n";
        let err = ProjectCatalog::from_manifest_str(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate project path"));
    }

    #[test]
    fn test_from_manifest_rejects_duplicate_token() {
        let yaml = r"
users:
  - username: alice
    token: shared
  - username: bob
    token: shared
";
        let err = ProjectCatalog::from_manifest_str(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate token"));
    }

    #[test]
    fn test_from_manifest_rejects_unknown_field() {
        let yaml = "projects:\n  - path: acme/widgets\n    owner: alice\n";
        let err = ProjectCatalog::from_manifest_str(yaml).unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn test_from_manifest_rejects_unknown_visibility() {
        let yaml = "projects:\n  - path: acme/widgets\n    visibility: secret\n";
        let err = ProjectCatalog::from_manifest_str(yaml).unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "projects:\n  - path: acme/widgets\n    visibility: internal").unwrap();

        let catalog = ProjectCatalog::load(file.path()).unwrap();

        assert_eq!(catalog.project_count(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectCatalog::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, LookupError::Io { .. }));
    }
}
