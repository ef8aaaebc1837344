//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::countries::CountriesCommand;
use crate::commands::doc_types::DocTypesCommand;
use crate::commands::schemas::SchemasCommand;

/// CLI for the DocOntology schema registry.
#[derive(Parser, Debug)]
#[command(name = "schemactl")]
#[command(author, version = env!("SCHEMACTL_VERSION"), about)]
#[command(long_about = "\
Manage schemas, document types and countries in the DocOntology schema registry.

Default API URL: https://api.docdigitizer.com/registry

Environment variables:
  SCHEMACTL_API_URL    API base URL (overrides default)
  SCHEMACTL_API_KEY    API key for authentication (optional)
  SCHEMACTL_TIMEOUT    Request timeout in seconds (default: 30)

Run without arguments to enter interactive shell mode.")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags accepted by every command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// API base URL (env: SCHEMACTL_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// API key (env: SCHEMACTL_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Request timeout in seconds (env: SCHEMACTL_TIMEOUT)
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

impl GlobalArgs {
    /// Flags given on a shell line take precedence over the shell's own.
    pub fn layered_over(&self, outer: &GlobalArgs) -> GlobalArgs {
        GlobalArgs {
            api_url: self.api_url.clone().or_else(|| outer.api_url.clone()),
            api_key: self.api_key.clone().or_else(|| outer.api_key.clone()),
            timeout: self.timeout.or(outer.timeout),
            json: self.json || outer.json,
            verbose: outer.verbose,
            json_logs: outer.json_logs,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version number
    Version,

    /// Check API health
    Health,

    /// Get all active doc types and countries
    #[command(visible_aliases = ["ref", "reference"])]
    ReferenceData,

    /// Manage document types
    #[command(visible_alias = "doctypes")]
    DocTypes(DocTypesCommand),

    /// Manage countries
    Countries(CountriesCommand),

    /// Manage schemas
    Schemas(SchemasCommand),

    /// Start interactive shell
    Shell,
}
