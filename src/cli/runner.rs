//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::docs;
use crate::error::{Error, Result};
use crate::provider::{load_config_value, ConfiguredProvider, Provider, Response};
use crate::resource::ResourceState;
use crate::types::{JsonObject, JsonValue};
use anyhow::Context;
use serde::Serialize;
use tracing::warn;

/// CLI runner
pub struct Runner {
    cli: Cli,
    provider: Provider,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            provider: Provider::new(crate::VERSION),
        }
    }

    /// Run the CLI command
    ///
    /// Errors carry the step that failed as context; print them with `{:#}`.
    pub async fn run(&self) -> anyhow::Result<()> {
        let resource_type = self.cli.resource_type.as_str();
        match &self.cli.command {
            Commands::Schema => self.print(&self.provider.schema_document())?,
            Commands::Docs => println!("{}", docs::render_markdown(&self.provider)),
            Commands::Create { resource_json } => {
                let config = parse_resource_json(resource_json)?;
                let provider = self.configure()?;
                let response = provider.create(resource_type, &config).await;
                self.emit(&response)?;
            }
            Commands::Read { id } => {
                let provider = self.configure()?;
                let response = provider.read(resource_type, bare_state(id)).await;
                self.emit(&response)?;
            }
            Commands::Update { id, resource_json } => {
                let config = parse_resource_json(resource_json)?;
                let provider = self.configure()?;

                // Prior state comes from the remote service.
                let current = provider.read(resource_type, bare_state(id)).await;
                if current.has_errors() {
                    return Ok(self.emit(&current)?);
                }
                let prior = current.state.unwrap_or_else(|| bare_state(id));

                let response = provider.update(resource_type, prior, &config).await;
                self.emit(&response)?;
            }
            Commands::Delete { id } => {
                let provider = self.configure()?;
                let response = provider.delete(resource_type, bare_state(id)).await;
                self.emit(&response)?;
            }
            Commands::Import { id } => {
                let provider = self.configure()?;
                let response = provider.import(resource_type, id).await;
                self.emit(&response)?;
            }
            Commands::Serve { port } => {
                let config = crate::cli::ServerConfig {
                    provider: self.configure()?,
                    schema: self.provider.schema_document(),
                };
                crate::cli::serve(config, *port)
                    .await
                    .with_context(|| format!("HTTP server on port {port} stopped"))?;
            }
        }
        Ok(())
    }

    /// Read the provider config block from the CLI flags
    fn config_value(&self) -> anyhow::Result<JsonValue> {
        if let Some(ref json) = self.cli.config_json {
            return serde_json::from_str(json).context("parsing --config-json");
        }
        if let Some(ref path) = self.cli.config {
            return load_config_value(path)
                .with_context(|| format!("loading provider config from {}", path.display()));
        }
        Err(Error::config(
            "Provider config not specified (use --config or --config-json)",
        )
        .into())
    }

    /// Configure the provider, turning diagnostics into an error
    fn configure(&self) -> anyhow::Result<ConfiguredProvider> {
        let config = self.config_value()?;
        self.provider
            .configure(&config)
            .map_err(|diags| Error::Diagnostics {
                summary: diags.error_summary(),
            })
            .context("configuring the Mailjet provider")
    }

    /// Print an operation response and fail on error diagnostics
    fn emit(&self, response: &Response) -> Result<()> {
        for diagnostic in response.diagnostics.iter().filter(|d| !d.is_error()) {
            warn!("{diagnostic}");
        }
        self.print(response)?;
        response.diagnostics.clone().into_result().map(|_| ())
    }

    fn print<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{output}");
        Ok(())
    }
}

fn parse_resource_json(json: &str) -> anyhow::Result<JsonValue> {
    serde_json::from_str(json).context("parsing --resource-json")
}

fn bare_state(id: &str) -> ResourceState {
    ResourceState {
        id: id.to_string(),
        attributes: JsonObject::new(),
    }
}
