//! Registry base URL type.

use std::fmt;
use url::Url;

use crate::error::{ConfigError, Error};

/// A validated registry base URL.
///
/// The URL must be absolute, use `http` or `https`, and name a host. A
/// trailing slash is dropped so that routes join cleanly onto any path prefix
/// the deployment uses (e.g. `/registry`).
///
/// # Example
///
/// ```
/// use docontology::BaseUrl;
///
/// let base = BaseUrl::new("https://api.docdigitizer.com/registry/").unwrap();
/// assert_eq!(
///     base.endpoint(&["admin", "schemas", "sch 1"]).as_str(),
///     "https://api.docdigitizer.com/registry/admin/schemas/sch%201"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the string is empty or is not a
    /// usable http(s) URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref().trim();
        if s.is_empty() {
            return Err(ConfigError::MissingBaseUrl.into());
        }

        let mut url = Url::parse(s).map_err(|e| ConfigError::InvalidBaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Returns the URL for a route made of path segments.
    ///
    /// Each segment is percent-encoded on its own, so identifiers containing
    /// `/`, spaces or other reserved characters stay a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::InvalidBaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
