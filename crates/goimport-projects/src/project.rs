//! Projects, visibility levels, membership and the read access check.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::viewer::Viewer;

/// Project visibility level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Readable by members only.
    #[default]
    Private,
    /// Readable by any authenticated user.
    Internal,
    /// Readable by everyone, including anonymous viewers.
    Public,
}

/// Project membership role.
///
/// Ordered from least to most privileged. Any level grants read access to a
/// private project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Guest,
    Reporter,
    Developer,
    #[serde(alias = "master")]
    Maintainer,
    Owner,
}

/// A project known to the finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    full_path: String,
    visibility: Visibility,
    members: BTreeMap<String, AccessLevel>,
}

impl Project {
    /// Create a project without members.
    ///
    /// `full_path` is stored verbatim and returned as the canonical path.
    #[must_use]
    pub fn new(full_path: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            full_path: full_path.into(),
            visibility,
            members: BTreeMap::new(),
        }
    }

    /// Add a member with the given role.
    #[must_use]
    pub fn with_member(mut self, username: impl Into<String>, level: AccessLevel) -> Self {
        self.members.insert(username.into(), level);
        self
    }

    /// Canonical full path (`namespace/.../project`).
    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Membership role of `viewer`, if any.
    #[must_use]
    pub fn access_level_for(&self, viewer: &Viewer) -> Option<AccessLevel> {
        viewer
            .username()
            .and_then(|name| self.members.get(name).copied())
    }

    pub(crate) fn members(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }
}

/// Check whether `viewer` may read `project`.
///
/// - public projects are readable by everyone
/// - internal projects are readable by any authenticated viewer
/// - private projects are readable by members at any access level
#[must_use]
pub fn can_read_project(viewer: &Viewer, project: &Project) -> bool {
    match project.visibility {
        Visibility::Public => true,
        Visibility::Internal => viewer.is_authenticated(),
        Visibility::Private => project.access_level_for(viewer).is_some(),
    }
}
