//! Schema operations.

use tracing::{debug, instrument};

use crate::Result;
use crate::models::{
    CreateSchemaRequest, FindBestRequest, FindBestResponse, ListSchemasOptions, Page,
    SchemaWithRelations, UpdateSchemaRequest,
};

use super::routes::{ACTIVATE, ADMIN, DEPRECATE, FIND_BEST, SCHEMAS, VERSIONS};
use super::{Registry, required};

impl Registry {
    /// List schemas matching `options`, one page at a time.
    #[instrument(skip(self))]
    pub async fn list_schemas(
        &self,
        options: &ListSchemasOptions,
    ) -> Result<Page<SchemaWithRelations>> {
        let mut url = self.api.url(&[ADMIN, SCHEMAS]);

        let pairs = options.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        let page = self.api.get(url).await?;
        Ok(page.unwrap_or_default())
    }

    /// Fetch a schema by public id (`sch_...`) or version id (`schv_...`).
    #[instrument(skip(self))]
    pub async fn get_schema(&self, id: &str) -> Result<SchemaWithRelations> {
        let schema = self.api.get(self.api.url(&[ADMIN, SCHEMAS, id])).await?;
        required(schema, "schema")
    }

    /// Fetch one specific schema version.
    #[instrument(skip(self))]
    pub async fn get_schema_version(&self, version_id: &str) -> Result<SchemaWithRelations> {
        let schema = self
            .api
            .get(self.api.url(&[ADMIN, SCHEMAS, VERSIONS, version_id]))
            .await?;
        required(schema, "schema version")
    }

    /// List every version in a schema's lineage.
    #[instrument(skip(self))]
    pub async fn list_schema_versions(&self, id: &str) -> Result<Vec<SchemaWithRelations>> {
        let versions: Option<Vec<SchemaWithRelations>> = self
            .api
            .get(self.api.url(&[ADMIN, SCHEMAS, id, VERSIONS]))
            .await?;
        Ok(versions.unwrap_or_default())
    }

    /// Create a schema. It starts in `draft` status.
    #[instrument(skip(self, request), fields(name = %request.name, doc_type = %request.doc_type_code))]
    pub async fn create_schema(&self, request: &CreateSchemaRequest) -> Result<SchemaWithRelations> {
        let schema: Option<SchemaWithRelations> = self
            .api
            .post(self.api.url(&[ADMIN, SCHEMAS]), request)
            .await?;
        if let Some(schema) = &schema {
            debug!(id = %schema.schema.public_id, "schema created");
        }
        required(schema, "schema")
    }

    /// Update the fields set in `request`.
    ///
    /// The server decides whether this edits a draft in place or creates a
    /// new version of an active schema.
    #[instrument(skip(self, request))]
    pub async fn update_schema(
        &self,
        id: &str,
        request: &UpdateSchemaRequest,
    ) -> Result<SchemaWithRelations> {
        let schema = self
            .api
            .patch(self.api.url(&[ADMIN, SCHEMAS, id]), request)
            .await?;
        required(schema, "schema")
    }

    /// Move a draft schema to `active`.
    ///
    /// The current status is not checked locally; the server rejects
    /// invalid transitions.
    #[instrument(skip(self))]
    pub async fn activate_schema(&self, id: &str) -> Result<SchemaWithRelations> {
        let schema = self
            .api
            .post_empty(self.api.url(&[ADMIN, SCHEMAS, id, ACTIVATE]))
            .await?;
        required(schema, "schema")
    }

    /// Move an active schema to `deprecated`.
    #[instrument(skip(self))]
    pub async fn deprecate_schema(&self, id: &str) -> Result<SchemaWithRelations> {
        let schema = self
            .api
            .post_empty(self.api.url(&[ADMIN, SCHEMAS, id, DEPRECATE]))
            .await?;
        required(schema, "schema")
    }

    /// Delete a draft schema.
    #[instrument(skip(self))]
    pub async fn delete_schema(&self, id: &str) -> Result<()> {
        self.api.delete(self.api.url(&[ADMIN, SCHEMAS, id])).await
    }

    /// Ask the server for the most specific schema for a document type,
    /// country and customer.
    ///
    /// A response without a schema is not an error.
    #[instrument(skip(self))]
    pub async fn find_best_schema(&self, request: &FindBestRequest) -> Result<FindBestResponse> {
        let response = self
            .api
            .post(self.api.url(&[SCHEMAS, FIND_BEST]), request)
            .await?;
        Ok(response.unwrap_or(FindBestResponse {
            schema: None,
            match_type: None,
        }))
    }
}
