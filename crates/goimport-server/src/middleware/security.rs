//! Response hardening headers.
//!
//! Discovery documents are static markup meant for the `go` tool, not a
//! browser, so every response refuses scripts, framing and MIME sniffing.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// The go-import document loads nothing, so nothing is allowed.
const CSP: &str = "default-src 'none'; frame-ancestors 'none'";

/// Headers set on every response, overriding anything a route produced.
pub(crate) const SECURITY_HEADERS: [(&str, &str); 3] = [
    ("content-security-policy", CSP),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
];

fn overriding(name: &'static str, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

pub(crate) fn csp_layer() -> SetResponseHeaderLayer<HeaderValue> {
    let (name, value) = SECURITY_HEADERS[0];
    overriding(name, value)
}

pub(crate) fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    let (name, value) = SECURITY_HEADERS[1];
    overriding(name, value)
}

pub(crate) fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    let (name, value) = SECURITY_HEADERS[2];
    overriding(name, value)
}
