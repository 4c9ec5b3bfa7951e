//! `goimport check` command implementation.

use std::path::PathBuf;

use clap::Args;
use goimport_config::{CliSettings, Config};
use goimport_projects::ProjectCatalog;
use goimport_resolver::BaseUrl;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover goimport.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project catalog manifest (overrides config).
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            catalog: self.catalog,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let base_url = BaseUrl::parse(&config.instance.url)?;
        let catalog = ProjectCatalog::load(&config.catalog_path)?;

        match &config.config_path {
            Some(path) => output.field("Configuration", path.display()),
            None => output.field("Configuration", "defaults (no goimport.toml found)"),
        }
        output.field("Instance URL", &base_url);
        output.field(
            "Project catalog",
            format!(
                "{} ({} projects, {} users)",
                config.catalog_path.display(),
                catalog.project_count(),
                catalog.user_count()
            ),
        );

        if catalog.project_count() == 0 {
            output.warning("Catalog has no projects; every nested path will resolve to namespace/project");
        }
        output.success("Configuration OK");

        Ok(())
    }
}
