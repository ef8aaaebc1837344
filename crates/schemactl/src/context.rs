//! Per-command execution context: resolved configuration, client and output mode.

use std::time::Duration;

use anyhow::{Context as _, Result};
use docontology::{Config, Registry};
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::output::OutputMode;

pub struct Context {
    pub registry: Registry,
    pub output: OutputMode,
}

impl Context {
    /// Resolve configuration from flags over the environment and build a client.
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let config = resolve_config(args)?;
        debug!(?config, "resolved configuration");

        let registry = Registry::new(&config).context("Invalid configuration")?;

        Ok(Self {
            registry,
            output: OutputMode::from_json_flag(args.json),
        })
    }
}

/// Layer command-line flags over the environment configuration.
///
/// Empty flags and a zero timeout count as unset.
fn resolve_config(args: &GlobalArgs) -> Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;
    Ok(apply_flags(config, args))
}

fn apply_flags(mut config: Config, args: &GlobalArgs) -> Config {
    if let Some(url) = &args.api_url {
        config = config.with_base_url(url.trim());
    }
    if let Some(key) = &args.api_key {
        config = config.with_api_key(key.as_str());
    }
    if let Some(secs) = args.timeout.filter(|&s| s > 0) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}
