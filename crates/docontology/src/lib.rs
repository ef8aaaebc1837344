//! docontology - client for the DocOntology schema registry.
//!
//! The registry stores versioned JSON Schemas per document type and country.
//! This crate maps each registry operation onto one HTTP request through a
//! [`Registry`] value built from an explicit [`Config`].
//!
//! # Example
//!
//! ```no_run
//! use docontology::{Config, FindBestRequest, Registry};
//!
//! # async fn example() -> Result<(), docontology::Error> {
//! let config = Config::from_env()?.with_api_key("my-api-key");
//! let registry = Registry::new(&config)?;
//!
//! let best = registry
//!     .find_best_schema(&FindBestRequest::new("Invoice").country("PT"))
//!     .await?;
//!
//! match best.schema {
//!     Some(schema) => println!("{} ({:?})", schema.schema.public_id, best.match_type),
//!     None => println!("no schema applies"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod registry;
pub mod types;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ApiError, ConfigError, Error, TransportError};
pub use http::ApiClient;
pub use models::*;
pub use registry::Registry;
pub use types::{BaseUrl, Patch};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
