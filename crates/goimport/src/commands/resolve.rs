//! `goimport resolve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use goimport_config::{CliSettings, Config};
use goimport_projects::{ProjectCatalog, ProjectFinder, Viewer, ViewerAuthenticator};
use goimport_resolver::{BaseUrl, DiscoveryRequest, GoImport};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Import path to resolve (e.g. acme/widgets/pkg/util).
    path: String,

    /// Token identifying the viewer (default: anonymous).
    #[arg(long, env = "GOIMPORT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to configuration file (default: auto-discover goimport.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Instance base URL (overrides config).
    #[arg(long, env = "GOIMPORT_URL")]
    url: Option<String>,

    /// Project catalog manifest (overrides config).
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// Prints exactly the document the server would answer
    /// `GET /<path>?go-get=1` with.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            url: self.url,
            catalog: self.catalog,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let body = render_document(&config, &self.path, self.token.as_deref())?;
        Output::new().result(&body)?;

        Ok(())
    }
}

/// Render the go-import document for `path` as seen by the owner of `token`.
fn render_document(config: &Config, path: &str, token: Option<&str>) -> Result<String, CliError> {
    let catalog = Arc::new(ProjectCatalog::load(&config.catalog_path)?);
    let viewer = token.map_or(Viewer::Anonymous, |token| catalog.authenticate(token));
    tracing::debug!(%viewer, path, "Resolving import path");

    let go_import = GoImport::new(
        catalog as Arc<dyn ProjectFinder>,
        BaseUrl::parse(&config.instance.url)?,
    );
    let request = DiscoveryRequest::new(path, Some("1".to_owned()), viewer);

    go_import
        .respond(&request)
        .map(|response| response.body)
        .ok_or_else(|| CliError::Validation(format!("Not an import path: {path:?}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config_with_catalog(manifest: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("projects.yaml"), manifest).unwrap();
        std::fs::write(
            dir.path().join("goimport.toml"),
            "[instance]\nurl = \"https://example.com\"\n",
        )
        .unwrap();
        let config = Config::load(Some(&dir.path().join("goimport.toml")), None).unwrap();
        (dir, config)
    }

    const MANIFEST: &str = r"
users:
  - username: alice
    token: glpat-alice
projects:
  - path: acme/widgets
    visibility: public
  - path: acme/platform/tools
    members:
      alice: developer
";

    #[test]
    fn test_render_document_anonymous() {
        let (_dir, config) = config_with_catalog(MANIFEST);

        let body = render_document(&config, "acme/platform/tools/cmd", None).unwrap();

        assert!(body.contains(
            "content='example.com/acme/platform git https://example.com/acme/platform.git'"
        ));
    }

    #[test]
    fn test_render_document_with_token() {
        let (_dir, config) = config_with_catalog(MANIFEST);

        let body = render_document(&config, "acme/platform/tools/cmd", Some("glpat-alice")).unwrap();

        assert!(body.contains("content='example.com/acme/platform/tools git"));
    }

    #[test]
    fn test_render_document_rejects_empty_path() {
        let (_dir, config) = config_with_catalog(MANIFEST);

        let err = render_document(&config, "/", None).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_render_document_public_ancestor() {
        let (_dir, config) = config_with_catalog(MANIFEST);

        let body = render_document(&config, "/acme/widgets/internal/util", None).unwrap();

        assert_eq!(
            body,
            "<!DOCTYPE html><html><head><meta content='example.com/acme/widgets git https://example.com/acme/widgets.git' name='go-import'></head></html>\n"
        );
    }
}
