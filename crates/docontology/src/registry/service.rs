//! Service-level endpoints.

use tracing::instrument;

use crate::Result;
use crate::models::{Health, ReferenceData};

use super::routes::{HEALTH, REFERENCE_DATA};
use super::{Registry, required};

impl Registry {
    /// Check the API server and its database connection.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<Health> {
        let health = self.api.get(self.api.url(&[HEALTH])).await?;
        required(health, "health status")
    }

    /// Fetch all active document types and countries in one request.
    #[instrument(skip(self))]
    pub async fn reference_data(&self) -> Result<ReferenceData> {
        let data = self.api.get(self.api.url(&[REFERENCE_DATA])).await?;
        Ok(data.unwrap_or_default())
    }
}
