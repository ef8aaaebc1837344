//! Document type operations.

use tracing::{debug, instrument};

use crate::Result;
use crate::models::{CreateDocTypeRequest, DocType, UpdateDocTypeRequest};

use super::routes::{ADMIN, DOC_TYPES};
use super::{Registry, required};

impl Registry {
    /// List document types.
    ///
    /// The public endpoint returns active types only; `include_inactive`
    /// switches to the admin listing.
    #[instrument(skip(self))]
    pub async fn list_doc_types(&self, include_inactive: bool) -> Result<Vec<DocType>> {
        let url = if include_inactive {
            self.api.url(&[ADMIN, DOC_TYPES])
        } else {
            self.api.url(&[DOC_TYPES])
        };
        let doc_types: Option<Vec<DocType>> = self.api.get(url).await?;
        Ok(doc_types.unwrap_or_default())
    }

    /// Fetch a document type by code.
    #[instrument(skip(self))]
    pub async fn get_doc_type(&self, code: &str) -> Result<DocType> {
        let doc_type = self.api.get(self.api.url(&[ADMIN, DOC_TYPES, code])).await?;
        required(doc_type, "doc type")
    }

    /// Create a document type.
    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create_doc_type(&self, request: &CreateDocTypeRequest) -> Result<DocType> {
        let doc_type = self
            .api
            .post(self.api.url(&[ADMIN, DOC_TYPES]), request)
            .await?;
        debug!("doc type created");
        required(doc_type, "doc type")
    }

    /// Update the fields set in `request`, leaving the rest untouched.
    #[instrument(skip(self, request))]
    pub async fn update_doc_type(
        &self,
        code: &str,
        request: &UpdateDocTypeRequest,
    ) -> Result<DocType> {
        let doc_type = self
            .api
            .patch(self.api.url(&[ADMIN, DOC_TYPES, code]), request)
            .await?;
        required(doc_type, "doc type")
    }

    /// Soft-delete a document type (the server marks it inactive).
    #[instrument(skip(self))]
    pub async fn delete_doc_type(&self, code: &str) -> Result<()> {
        self.api.delete(self.api.url(&[ADMIN, DOC_TYPES, code])).await
    }
}
