//! Project lookup and access-check contracts for the go-import endpoint.
//!
//! The discovery endpoint never talks to a database directly. It relies on two
//! collaborators defined here:
//!
//! - [`ProjectFinder`] resolves a batch of candidate paths to the most specific
//!   project the viewer may read, folding "not found" and "not allowed" into
//!   the same answer
//! - [`ViewerAuthenticator`] maps a request credential to a [`Viewer`]
//!
//! [`ProjectCatalog`] implements both on top of an in-memory table that can be
//! loaded from a YAML manifest.
//!
//! # Example
//!
//! ```ignore
//! use goimport_projects::{Project, ProjectCatalog, ProjectFinder, Viewer, Visibility};
//!
//! let catalog = ProjectCatalog::new()
//!     .with_project(Project::new("acme/widgets", Visibility::Public));
//!
//! let candidates = ["acme/widgets/internal", "acme/widgets"];
//! let project = catalog.find_readable(&candidates, &Viewer::Anonymous)?;
//! assert_eq!(project.unwrap().full_path(), "acme/widgets");
//! ```

mod catalog;
mod finder;
mod project;
mod viewer;

pub use catalog::ProjectCatalog;
pub use finder::{LookupError, ProjectFinder};
pub use project::{AccessLevel, Project, Visibility, can_read_project};
pub use viewer::{Viewer, ViewerAuthenticator};
