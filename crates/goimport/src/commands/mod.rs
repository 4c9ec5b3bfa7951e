//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod resolve;
pub(crate) mod serve;

pub(crate) use check::CheckArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use serve::ServeArgs;
