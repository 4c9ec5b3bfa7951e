//! Discovery request classification.
//!
//! A request is a discovery request when its `go-get` query parameter reads as
//! the integer `1` and its path has at least one non-empty segment. The
//! integer reading is lenient: leading whitespace and a sign are accepted, the
//! leading run of digits is taken, and anything unparseable reads as `0`.

use goimport_projects::Viewer;

/// Query parameter signalling a discovery request.
pub const GO_GET_PARAM: &str = "go-get";

/// Incoming request fields the discovery endpoint looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryRequest {
    path: String,
    go_get: Option<String>,
    viewer: Viewer,
}

impl DiscoveryRequest {
    /// Create a request from an already extracted `go-get` value.
    ///
    /// `path` is a percent-decoded request path, with or without a leading
    /// slash.
    #[must_use]
    pub fn new(path: impl Into<String>, go_get: Option<String>, viewer: Viewer) -> Self {
        Self {
            path: path.into(),
            go_get,
            viewer,
        }
    }

    /// Create a request from a raw query string.
    ///
    /// When `go-get` appears more than once the last occurrence wins. A query
    /// string that can't be decoded is treated as having no parameters.
    #[must_use]
    pub fn from_query(path: impl Into<String>, query: Option<&str>, viewer: Viewer) -> Self {
        let go_get = query.and_then(go_get_param);
        Self::new(path, go_get, viewer)
    }

    /// Replace the viewer.
    ///
    /// Lets callers classify first and authenticate only discovery requests.
    #[must_use]
    pub fn with_viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = viewer;
        self
    }

    /// Request path as given.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw `go-get` value, if present.
    #[must_use]
    pub fn go_get(&self) -> Option<&str> {
        self.go_get.as_deref()
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }
}

/// Decide whether `request` asks for go-import metadata.
///
/// Never fails; malformed input is simply not a discovery request.
#[must_use]
pub fn is_discovery_request(request: &DiscoveryRequest) -> bool {
    let go_get = request.go_get().map_or(0, leading_integer);
    go_get == 1 && !path_segments(request.path()).is_empty()
}

/// Split a request path into its non-empty segments.
///
/// The leading slash, doubled slashes and a trailing slash all vanish.
pub(crate) fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Extract the last `go-get` value from a query string.
fn go_get_param(query: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == GO_GET_PARAM).then_some(value))
}

/// Read the leading integer of `value`, or `0` if there is none.
fn leading_integer(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}
