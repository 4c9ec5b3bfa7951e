//! Downstream application handlers.
//!
//! Requests the discovery middleware passes through end up here.

use axum::http::StatusCode;

/// Handle GET /-/health.
pub(crate) async fn health() -> &'static str {
    "ok"
}

/// Fallback for every other route.
pub(crate) async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
