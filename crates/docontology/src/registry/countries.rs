//! Country operations.

use tracing::instrument;

use crate::Result;
use crate::models::{Country, CreateCountryRequest, UpdateCountryRequest};

use super::routes::{ADMIN, COUNTRIES};
use super::{Registry, required};

impl Registry {
    /// List countries, optionally including inactive ones.
    #[instrument(skip(self))]
    pub async fn list_countries(&self, include_inactive: bool) -> Result<Vec<Country>> {
        let url = if include_inactive {
            self.api.url(&[ADMIN, COUNTRIES])
        } else {
            self.api.url(&[COUNTRIES])
        };
        let countries: Option<Vec<Country>> = self.api.get(url).await?;
        Ok(countries.unwrap_or_default())
    }

    /// Fetch a country by its ISO 3166-1 alpha-2 code.
    #[instrument(skip(self))]
    pub async fn get_country(&self, code: &str) -> Result<Country> {
        let country = self.api.get(self.api.url(&[ADMIN, COUNTRIES, code])).await?;
        required(country, "country")
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create_country(&self, request: &CreateCountryRequest) -> Result<Country> {
        let country = self
            .api
            .post(self.api.url(&[ADMIN, COUNTRIES]), request)
            .await?;
        required(country, "country")
    }

    #[instrument(skip(self, request))]
    pub async fn update_country(
        &self,
        code: &str,
        request: &UpdateCountryRequest,
    ) -> Result<Country> {
        let country = self
            .api
            .patch(self.api.url(&[ADMIN, COUNTRIES, code]), request)
            .await?;
        required(country, "country")
    }

    /// Soft-delete a country.
    #[instrument(skip(self))]
    pub async fn delete_country(&self, code: &str) -> Result<()> {
        self.api.delete(self.api.url(&[ADMIN, COUNTRIES, code])).await
    }
}
