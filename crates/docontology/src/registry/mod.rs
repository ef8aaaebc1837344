//! Typed operations on the DocOntology registry.
//!
//! Each method on [`Registry`] is one request: a fixed route, a payload
//! shape and a decoded result. Nothing is cached between calls; the server
//! is the only source of truth.

mod countries;
mod doc_types;
mod documents;
mod routes;
mod schemas;
mod service;

use crate::Result;
use crate::config::Config;
use crate::error::Error;
use crate::http::ApiClient;

/// Client for the registry's resource operations.
#[derive(Debug, Clone)]
pub struct Registry {
    api: ApiClient,
}

impl Registry {
    /// Build a registry client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configuration is unusable.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    /// Wrap an existing request engine.
    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Returns the underlying request engine.
    pub fn client(&self) -> &ApiClient {
        &self.api
    }
}

/// Unwrap a body the operation cannot do without.
fn required<T>(value: Option<T>, what: &str) -> Result<T> {
    value.ok_or_else(|| Error::Decode {
        message: format!("empty response body, expected {what}"),
    })
}
