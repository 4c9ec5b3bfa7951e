//! `goimport serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use goimport_config::{CliSettings, Config};
use goimport_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover goimport.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Instance base URL used in go-import documents (overrides config).
    #[arg(long, env = "GOIMPORT_URL")]
    url: Option<String>,

    /// Project catalog manifest (overrides config).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Enable verbose output (request and startup logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            url: self.url,
            catalog: self.catalog,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.field("Instance URL", &config.instance.url);
        output.field("Project catalog", config.catalog_path.display());

        run_server(server_config_from_config(&config)).await?;

        Ok(())
    }
}
