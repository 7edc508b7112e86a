//! CLI commands and argument parsing

use crate::resource::SUBACCOUNT_TYPE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terraform provider for Mailjet sub-account API keys
#[derive(Parser, Debug)]
#[command(name = "terraform-provider-mailjet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Provider configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline provider configuration JSON
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Resource type to operate on
    #[arg(short = 't', long, global = true, default_value = SUBACCOUNT_TYPE)]
    pub resource_type: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print provider and resource schemas
    Schema,

    /// Print Markdown documentation generated from the schemas
    Docs,

    /// Create a resource
    Create {
        /// Resource configuration JSON
        #[arg(long)]
        resource_json: String,
    },

    /// Read a resource by ID
    Read {
        /// Resource ID
        #[arg(long)]
        id: String,
    },

    /// Update a resource by ID
    Update {
        /// Resource ID
        #[arg(long)]
        id: String,

        /// Resource configuration JSON
        #[arg(long)]
        resource_json: String,
    },

    /// Delete a resource by ID
    Delete {
        /// Resource ID
        #[arg(long)]
        id: String,
    },

    /// Import an existing resource by ID
    Import {
        /// Resource ID
        #[arg(long)]
        id: String,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "terraform-provider-mailjet",
            "--config-json",
            r#"{"public_key":"a","private_key":"b"}"#,
            "create",
            "--resource-json",
            r#"{"name":"ops"}"#,
        ])
        .unwrap();

        assert_eq!(cli.resource_type, "mailjet_subaccount");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Create { ref resource_json } if resource_json.contains("ops")));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "terraform-provider-mailjet",
            "read",
            "--id",
            "42",
            "-C",
            "provider.yaml",
            "--format",
            "pretty",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("provider.yaml")));
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Read { ref id } if id == "42"));
    }

    #[test]
    fn test_update_requires_resource_json() {
        let result = Cli::try_parse_from(["terraform-provider-mailjet", "update", "--id", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::try_parse_from(["terraform-provider-mailjet", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: 8080 }));
    }
}
