//! Command implementations.

pub mod countries;
pub mod doc_types;
mod health;
mod reference;
pub mod schemas;

use anyhow::{Result, bail};

use crate::cli::{Commands, GlobalArgs};
use crate::context::Context;

/// Run one command with the given global flags.
pub async fn dispatch(command: Commands, global: &GlobalArgs) -> Result<()> {
    match command {
        Commands::Version => {
            println!("schemactl version {}", env!("SCHEMACTL_VERSION"));
            Ok(())
        }
        Commands::Shell => bail!("already in interactive shell"),
        Commands::Health => health::run(&Context::new(global)?).await,
        Commands::ReferenceData => reference::run(&Context::new(global)?).await,
        Commands::DocTypes(cmd) => doc_types::handle(cmd, &Context::new(global)?).await,
        Commands::Countries(cmd) => countries::handle(cmd, &Context::new(global)?).await,
        Commands::Schemas(cmd) => schemas::handle(cmd, &Context::new(global)?).await,
    }
}
