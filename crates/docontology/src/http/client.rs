//! HTTP request engine.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, Error, TransportError};
use crate::types::BaseUrl;

use super::tolerant;
use super::wire::ErrorResponse;

/// Header naming the customer on whose behalf a document is matched.
pub const CUSTOMER_ID_HEADER: &str = "X-Customer-Id";

/// HTTP client bound to one registry deployment.
///
/// Holds an immutable copy of the configuration. Every call sends exactly
/// one request and returns its decoded body.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: BaseUrl,
    api_key: Option<String>,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the base URL is missing or invalid.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let base = config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("docontology/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Http {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            timeout: config.timeout,
        })
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    /// Returns the per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True when requests carry an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// URL for a route below the base URL.
    pub fn url(&self, segments: &[&str]) -> Url {
        self.base.endpoint(segments)
    }

    /// Send a JSON request and decode the response.
    ///
    /// Returns `Ok(None)` when the server answered successfully with an
    /// empty body.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn execute<B, R>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Option<R>, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(%method, path = url.path(), "registry request");
        trace!(query = url.query().unwrap_or_default(), "query parameters");

        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| {
                Error::invalid_input(format!("failed to serialize request body: {e}"))
            })?;
            request = request.body(payload);
        }

        let bytes = self.send(request).await?;
        decode(&bytes)
    }

    /// GET a resource.
    pub async fn get<R: DeserializeOwned>(&self, url: Url) -> Result<Option<R>, Error> {
        self.execute::<(), R>(Method::GET, url, None).await
    }

    /// POST a JSON body.
    pub async fn post<B, R>(&self, url: Url, body: &B) -> Result<Option<R>, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(Method::POST, url, Some(body)).await
    }

    /// POST with no request body.
    pub async fn post_empty<R: DeserializeOwned>(&self, url: Url) -> Result<Option<R>, Error> {
        self.execute::<(), R>(Method::POST, url, None).await
    }

    /// PATCH a JSON body.
    pub async fn patch<B, R>(&self, url: Url, body: &B) -> Result<Option<R>, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(Method::PATCH, url, Some(body)).await
    }

    /// DELETE a resource, discarding any response body.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!(path = url.path(), "registry delete");
        self.send(self.client.delete(url)).await.map(|_| ())
    }

    /// POST a multipart form and decode the response.
    ///
    /// Response keys are normalized to camelCase before decoding, since the
    /// document endpoints are not consistent about casing.
    #[instrument(skip(self, form, headers), fields(base = %self.base))]
    pub async fn upload<R: DeserializeOwned>(
        &self,
        url: Url,
        form: Form,
        headers: &[(&'static str, &str)],
    ) -> Result<Option<R>, Error> {
        debug!(path = url.path(), "registry upload");

        let mut request = self.client.post(url).multipart(form);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let bytes = self.send(request).await?;
        if is_blank(&bytes) {
            return Ok(None);
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(Error::decode)?;
        serde_json::from_value(tolerant::normalize_keys(value))
            .map(Some)
            .map_err(Error::decode)
    }

    /// Attach auth, send, and map the status code.
    async fn send(&self, mut request: reqwest::RequestBuilder) -> Result<Vec<u8>, Error> {
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| self.transport(e))?;
        let status = response.status();
        trace!(status = %status, "registry response");

        let bytes = response.bytes().await.map_err(|e| self.transport(e))?;

        if status.as_u16() >= 400 {
            return Err(Error::Api(parse_error(status.as_u16(), &bytes)));
        }

        Ok(bytes.to_vec())
    }

    fn transport(&self, err: reqwest::Error) -> Error {
        let mut error = TransportError::from(err);
        if let TransportError::Timeout { duration_ms } = &mut error {
            *duration_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        }
        Error::Transport(error)
    }
}

// API key stays out of Debug output
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base.as_str())
            .field("authenticated", &self.api_key.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

fn decode<R: DeserializeOwned>(bytes: &[u8]) -> Result<Option<R>, Error> {
    if is_blank(bytes) {
        return Ok(None);
    }
    serde_json::from_slice(bytes).map(Some).map_err(Error::decode)
}

/// Build an [`ApiError`] from an error response body.
fn parse_error(status: u16, bytes: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorResponse>(bytes) {
        Ok(ErrorResponse {
            error: Some(message),
            details,
        }) if !message.is_empty() => ApiError {
            status,
            message,
            details,
        },
        _ => ApiError::new(status, String::from_utf8_lossy(bytes).trim()),
    }
}
