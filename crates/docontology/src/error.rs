//! Error types for the docontology client.
//!
//! Every operation fails with exactly one [`Error`]. The variants separate
//! failures that happened before a request left the machine, failures to
//! reach the server, and responses the server sent back.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for registry operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing local configuration. Never worth retrying.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request never reached the server or no response came back.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a status of 400 or above.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A successful response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Caller supplied arguments the request cannot be built from.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A local file for an upload could not be read.
    #[error("failed to read {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True when the server was never reached (network failure or timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// True when the request hit the configured deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Timeout { .. }))
    }

    /// HTTP status code, when the server responded with an error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            _ => None,
        }
    }

    pub(crate) fn decode(err: impl fmt::Display) -> Self {
        Error::Decode {
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No base URL after all sources were consulted.
    #[error("API URL is required. Set SCHEMACTL_API_URL or use --api-url flag")]
    MissingBaseUrl,

    /// The base URL is present but unusable.
    #[error("invalid API URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    /// An environment variable could not be parsed.
    #[error("invalid {name}: {reason}")]
    InvalidEnv { name: String, reason: String },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established (DNS, refused, TLS handshake).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request exceeded the configured deadline.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Any other failure while sending or reading the response.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { duration_ms: 0 }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// An error response from the registry.
///
/// `message` is the server's `error` field when the body decoded as an error
/// payload, otherwise the raw response body.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message.
    pub message: String,
    /// Structured details, when the server supplied them.
    pub details: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// True for 4xx responses.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// True for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error ({})", self.status)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
