//! Document upload operations: classify-and-match, and schema generation.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use crate::Result;
use crate::error::Error;
use crate::http::CUSTOMER_ID_HEADER;
use crate::models::{GenerateRequest, GenerateResponse, GenerateSource, MatchResponse};

use super::routes::{EXTRACT, GENERATE, SCHEMAS};
use super::{Registry, required};

impl Registry {
    /// Upload a PDF or JPEG, classify it and find the schema that applies.
    ///
    /// `customer_id` lets private schemas of that customer take part in the
    /// match.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn match_schema(
        &self,
        path: impl AsRef<Path>,
        customer_id: Option<&str>,
    ) -> Result<MatchResponse> {
        let form = Form::new().part("file", file_part(path.as_ref()).await?);

        let mut headers = Vec::new();
        if let Some(customer_id) = customer_id.filter(|c| !c.is_empty()) {
            headers.push((CUSTOMER_ID_HEADER, customer_id));
        }

        let response = self
            .api
            .upload(self.api.url(&[SCHEMAS, EXTRACT]), form, &headers)
            .await?;
        required(response, "match result")
    }

    /// Generate a JSON schema from a sample document or its text.
    #[instrument(skip(self, request), fields(doc_type = %request.doc_type_code, country = %request.country_code))]
    pub async fn generate_schema(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        if request.doc_type_code.is_empty() || request.country_code.is_empty() {
            return Err(Error::invalid_input(
                "doc type code and country code are required",
            ));
        }

        let mut form = Form::new()
            .text("docTypeCode", request.doc_type_code.clone())
            .text("countryCode", request.country_code.clone());

        form = match &request.source {
            GenerateSource::File { path, use_ocr } => {
                debug!(path = %path.display(), use_ocr, "generating from file");
                form.part("file", file_part(path).await?)
                    .text("useOCR", use_ocr.to_string())
            }
            GenerateSource::Text(text) => {
                if text.is_empty() {
                    return Err(Error::invalid_input("generation text must not be empty"));
                }
                form.text("text", text.clone())
            }
        };

        let response = self
            .api
            .upload(self.api.url(&[SCHEMAS, GENERATE]), form, &[])
            .await?;
        required(response, "generated schema")
    }
}

/// Read a local file into a multipart part named after the file.
async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await.map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/octet-stream")
        .map_err(|e| Error::invalid_input(format!("invalid upload part: {e}")))
}
