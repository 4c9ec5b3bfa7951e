//! Viewer extraction from request credentials.
//!
//! Tokens are read from, in order:
//! - `Private-Token: <token>`
//! - `Authorization: Bearer <token>`
//! - `Authorization: Basic <base64(user:token)>`, as sent by `go` from `.netrc`
//!
//! Missing, malformed or unknown credentials all yield an anonymous viewer.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use goimport_projects::{Viewer, ViewerAuthenticator};

const PRIVATE_TOKEN_HEADER: &str = "private-token";

/// Determine the viewer a request is evaluated as.
pub(crate) fn current_viewer(headers: &HeaderMap, authenticator: &dyn ViewerAuthenticator) -> Viewer {
    request_token(headers).map_or(Viewer::Anonymous, |token| authenticator.authenticate(&token))
}

/// Extract the credential token from request headers.
fn request_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = headers
        .get(PRIVATE_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        && !token.is_empty()
    {
        return Some(token.to_owned());
    }

    let authorization = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credentials) = authorization.trim().split_once(' ')?;
    let credentials = credentials.trim();

    if scheme.eq_ignore_ascii_case("bearer") {
        (!credentials.is_empty()).then(|| credentials.to_owned())
    } else if scheme.eq_ignore_ascii_case("basic") {
        basic_password(credentials)
    } else {
        None
    }
}

/// Password half of a Basic credential.
fn basic_password(encoded: &str) -> Option<String> {
    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (_, password) = decoded.split_once(':')?;
    (!password.is_empty()).then(|| password.to_owned())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use goimport_projects::ProjectCatalog;
    use pretty_assertions::assert_eq;

    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::new().with_user("alice", "glpat-alice")
    }

    #[test]
    fn test_no_credentials() {
        assert_eq!(current_viewer(&HeaderMap::new(), &catalog()), Viewer::Anonymous);
    }

    #[test]
    fn test_private_token_header() {
        let headers = headers(&[("private-token", "glpat-alice")]);
        assert_eq!(current_viewer(&headers, &catalog()), Viewer::user("alice"));
    }

    #[test]
    fn test_bearer_token() {
        let headers = headers(&[("authorization", "Bearer glpat-alice")]);
        assert_eq!(current_viewer(&headers, &catalog()), Viewer::user("alice"));
    }

    #[test]
    fn test_basic_credentials_use_password() {
        let value = format!("Basic {}", STANDARD.encode("alice:glpat-alice"));
        let headers = headers(&[("authorization", value.as_str())]);
        assert_eq!(current_viewer(&headers, &catalog()), Viewer::user("alice"));
    }

    #[test]
    fn test_private_token_takes_precedence() {
        let headers = headers(&[
            ("private-token", "glpat-alice"),
            ("authorization", "Bearer unknown"),
        ]);
        assert_eq!(request_token(&headers), Some("glpat-alice".to_owned()));
    }

    #[test]
    fn test_unknown_token_is_anonymous() {
        let headers = headers(&[("authorization", "Bearer nope")]);
        assert_eq!(current_viewer(&headers, &catalog()), Viewer::Anonymous);
    }

    #[test]
    fn test_malformed_credentials_are_ignored() {
        for value in ["Basic !!!notbase64", "Bearer", "Digest abc", "glpat-alice"] {
            let headers = headers(&[("authorization", value)]);
            assert_eq!(request_token(&headers), None, "{value}");
        }
        let no_colon = format!("Basic {}", STANDARD.encode("alice"));
        let headers = headers(&[("authorization", no_colon.as_str())]);
        assert_eq!(request_token(&headers), None);
    }
}
