//! Payloads for the document upload operations (match and generate).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schema::SchemaType;

/// Classification of an uploaded document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "doctype", alias = "docType")]
    pub doc_type: String,
    pub country: String,
    #[serde(default)]
    pub pages: Vec<u32>,
}

/// Schema selected for an uploaded document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedSchema {
    pub public_id: String,
    pub public_version_id: String,
    pub name: String,
    pub schema_type: SchemaType,
    #[serde(default)]
    pub content: Map<String, Value>,
}

/// Response from the match (extract) endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub classification: Classification,
    #[serde(default)]
    pub schema: Option<MatchedSchema>,
}

/// Where the content for schema generation comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateSource {
    /// A PDF or JPEG file, optionally run through OCR first.
    File { path: PathBuf, use_ocr: bool },
    /// Raw document text.
    Text(String),
}

impl GenerateSource {
    /// A file source with OCR enabled.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        GenerateSource::File {
            path: path.into(),
            use_ocr: true,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        GenerateSource::Text(text.into())
    }
}

/// Input for generating a schema from a sample document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    pub doc_type_code: String,
    pub country_code: String,
    pub source: GenerateSource,
}

impl GenerateRequest {
    pub fn new(
        doc_type_code: impl Into<String>,
        country_code: impl Into<String>,
        source: GenerateSource,
    ) -> Self {
        Self {
            doc_type_code: doc_type_code.into(),
            country_code: country_code.into(),
            source,
        }
    }
}

/// Generated schema content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSchema {
    #[serde(default)]
    pub content: Map<String, Value>,
    #[serde(default)]
    pub generated: bool,
}

/// Response from the generate endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub doc_type: String,
    pub country: String,
    pub schema: GeneratedSchema,
}
