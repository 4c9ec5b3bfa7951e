//! go-import discovery middleware.
//!
//! Answers `?go-get=1` requests with the go-import document and hands every
//! other request to the wrapped router untouched.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use goimport_projects::Viewer;
use goimport_resolver::{DiscoveryRequest, DiscoveryResponse, is_discovery_request};
use percent_encoding::percent_decode_str;

use crate::middleware::credentials::current_viewer;
use crate::state::AppState;

/// Intercept discovery requests before they reach the router.
pub(crate) async fn go_import(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let path = percent_decode_str(request.uri().path())
        .decode_utf8_lossy()
        .into_owned();
    let discovery = DiscoveryRequest::from_query(path, request.uri().query(), Viewer::Anonymous);

    if !is_discovery_request(&discovery) {
        return next.run(request).await;
    }

    // Authenticate only requests this middleware answers.
    let viewer = current_viewer(request.headers(), state.authenticator.as_ref());
    let discovery = discovery.with_viewer(viewer);

    match state.go_import.respond(&discovery) {
        Some(response) => into_response(response),
        None => next.run(request).await,
    }
}

fn into_response(response: DiscoveryResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    (
        status,
        [(header::CONTENT_TYPE, response.content_type)],
        response.body,
    )
        .into_response()
}
