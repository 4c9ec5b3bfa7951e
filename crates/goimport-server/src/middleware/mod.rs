//! Request middleware.

pub(crate) mod credentials;
pub(crate) mod go_import;
pub(crate) mod security;
