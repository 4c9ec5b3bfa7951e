//! go-import document rendering.

use std::fmt;

/// Error returned for an unusable base URL.
#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    #[error("base URL cannot be empty")]
    Empty,
    #[error("base URL must start with http:// or https://: {0}")]
    Scheme(String),
}

/// Absolute root URL of the instance, e.g. `https://example.com`.
///
/// Trailing slashes are dropped so that joining never produces `//`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Validate and normalize a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BaseUrlError`] if the URL is empty or not http(s).
    pub fn parse(url: &str) -> Result<Self, BaseUrlError> {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(BaseUrlError::Empty);
        }
        if strip_scheme(trimmed).len() == trimmed.len() {
            return Err(BaseUrlError::Scheme(url.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Absolute URL of a repository root path.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders go-import documents against a fixed base URL.
#[derive(Clone, Debug)]
pub struct DocumentRenderer {
    base_url: BaseUrl,
}

impl DocumentRenderer {
    #[must_use]
    pub fn new(base_url: BaseUrl) -> Self {
        Self { base_url }
    }

    /// Render the document advertising `repository_root` as a git repository.
    ///
    /// With base URL `https://example.com` and root `group/project`:
    ///
    /// ```text
    /// <!DOCTYPE html><html><head><meta content='example.com/group/project git https://example.com/group/project.git' name='go-import'></head></html>
    /// ```
    ///
    /// followed by a newline.
    #[must_use]
    pub fn render(&self, repository_root: &str) -> String {
        let project_url = self.base_url.join(repository_root);
        let import_prefix = strip_scheme(&project_url);
        format!(
            "<!DOCTYPE html><html><head><meta content='{} git {}.git' name='go-import'></head></html>\n",
            escape_html(import_prefix),
            escape_html(&project_url),
        )
    }
}

/// Drop a leading `http://` or `https://`.
fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn renderer(url: &str) -> DocumentRenderer {
        DocumentRenderer::new(BaseUrl::parse(url).unwrap())
    }

    #[test]
    fn test_render_exact_document() {
        let html = renderer("https://example.com").render("group/project");

        assert_eq!(
            html,
            "<!DOCTYPE html><html><head><meta content='example.com/group/project git https://example.com/group/project.git' name='go-import'></head></html>\n"
        );
    }

    #[test]
    fn test_render_http_base() {
        let html = renderer("http://gitlab.local:8080").render("a/b/c");

        assert!(html.contains("content='gitlab.local:8080/a/b/c git http://gitlab.local:8080/a/b/c.git'"));
    }

    #[test]
    fn test_render_base_with_trailing_slash() {
        assert_eq!(
            renderer("https://example.com/").render("group/project"),
            renderer("https://example.com").render("group/project")
        );
    }

    #[test]
    fn test_render_keeps_base_path_prefix() {
        let html = renderer("https://example.com/gitlab").render("group/project");

        assert!(html.contains(
            "content='example.com/gitlab/group/project git https://example.com/gitlab/group/project.git'"
        ));
    }

    #[test]
    fn test_render_escapes_markup() {
        let html = renderer("https://example.com").render("a/b'><script>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("a/b&#x27;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_base_url_rejects_empty() {
        assert!(matches!(BaseUrl::parse(""), Err(BaseUrlError::Empty)));
        assert!(matches!(BaseUrl::parse("/"), Err(BaseUrlError::Empty)));
    }

    #[test]
    fn test_base_url_rejects_other_schemes() {
        let err = BaseUrl::parse("ftp://example.com").unwrap_err();
        assert!(matches!(err, BaseUrlError::Scheme(_)));
        assert!(err.to_string().contains("ftp://example.com"));
        assert!(BaseUrl::parse("example.com").is_err());
    }

    #[test]
    fn test_base_url_join() {
        let base = BaseUrl::parse("https://example.com").unwrap();
        assert_eq!(base.join("group/project"), "https://example.com/group/project");
        assert_eq!(base.join("/group/project"), "https://example.com/group/project");
        assert_eq!(base.to_string(), "https://example.com");
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com/a"), "example.com/a");
        assert_eq!(strip_scheme("http://example.com/a"), "example.com/a");
        assert_eq!(strip_scheme("example.com/a"), "example.com/a");
    }
}
