//! Request viewer identity.

use std::fmt;

/// The identity a request is evaluated as.
///
/// Produced once per request by a [`ViewerAuthenticator`] and handed to the
/// project finder unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Viewer {
    /// No credential, or a credential that did not match any user.
    #[default]
    Anonymous,
    /// Authenticated user, identified by username.
    User(String),
}

impl Viewer {
    /// Create an authenticated viewer.
    #[must_use]
    pub fn user(username: impl Into<String>) -> Self {
        Self::User(username.into())
    }

    /// Username of an authenticated viewer.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::User(name) => Some(name),
        }
    }

    /// Check whether the viewer is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::User(name) => f.write_str(name),
        }
    }
}

/// Resolve a request credential to a [`Viewer`].
///
/// Implementations never fail: an unknown token is simply an anonymous
/// viewer, so that a bad credential cannot be told apart from no credential.
pub trait ViewerAuthenticator: Send + Sync {
    /// Return the viewer owning `token`, or [`Viewer::Anonymous`].
    fn authenticate(&self, token: &str) -> Viewer;
}
