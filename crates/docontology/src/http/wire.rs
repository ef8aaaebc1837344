//! Wire-only payloads that never leave the engine.

use serde::Deserialize;

/// Error body returned by the registry on 4xx/5xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Map<String, serde_json::Value>>,
}
