//! Schema records, lifecycle enums and schema request payloads.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::reference::{Country, DocType};
use crate::error::Error;
use crate::types::Patch;

/// Lifecycle status of a schema version.
///
/// Versions move `draft -> active -> deprecated`; the server rejects any
/// other transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Active,
    Deprecated,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Active => "active",
            Status::Deprecated => "deprecated",
        }
    }
}

/// Who may see a schema.
///
/// `private` schemas belong to one customer and carry a customer id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Community,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Community => "community",
            Visibility::Private => "private",
        }
    }
}

/// Kind of schema document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Standard,
    Regex,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Standard => "standard",
            SchemaType::Regex => "regex",
        }
    }
}

macro_rules! str_enum {
    ($ty:ident, $label:literal, [$($variant:ident),+]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($ty::$variant.as_str()) {
                        return Ok($ty::$variant);
                    }
                )+
                let expected = [$($ty::$variant.as_str()),+].join(", ");
                Err(Error::invalid_input(format!(
                    concat!("invalid ", $label, " '{}' (expected one of: {})"),
                    s, expected
                )))
            }
        }
    };
}

str_enum!(Status, "status", [Draft, Active, Deprecated]);
str_enum!(Visibility, "visibility", [Public, Community, Private]);
str_enum!(SchemaType, "schema type", [Standard, Regex]);

/// A versioned JSON Schema document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Stable identifier shared by every version (`sch_...`).
    pub public_id: String,
    /// Identifier of this exact version (`schv_...`).
    pub public_version_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: u32,
    pub content: Map<String, Value>,
    pub schema_type: SchemaType,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub visibility: Visibility,
    pub doc_type_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A schema with its document type and country resolved by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaWithRelations {
    #[serde(flatten)]
    pub schema: Schema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

/// Filters for listing schemas.
///
/// Unset filters, and a limit or offset of zero, are left out of the query
/// string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSchemasOptions {
    pub status: Option<Status>,
    pub doc_type_code: Option<String>,
    pub country_code: Option<String>,
    pub visibility: Option<Visibility>,
    pub customer_id: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListSchemasOptions {
    /// Query parameters in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                pairs.push((key, value));
            }
        };

        push("status", self.status.map(|s| s.to_string()));
        push("docTypeCode", self.doc_type_code.clone());
        push("countryCode", self.country_code.clone());
        push("visibility", self.visibility.map(|v| v.to_string()));
        push("customerId", self.customer_id.clone());
        push(
            "limit",
            self.limit.filter(|&n| n > 0).map(|n| n.to_string()),
        );
        push(
            "offset",
            self.offset.filter(|&n| n > 0).map(|n| n.to_string()),
        );

        pairs
    }
}

/// Request body for creating a schema. New schemas start as drafts.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchemaRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: Map<String, Value>,
    pub doc_type_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl CreateSchemaRequest {
    /// Create a request with the required fields only.
    pub fn new(
        name: impl Into<String>,
        doc_type_code: impl Into<String>,
        content: Map<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            content,
            doc_type_code: doc_type_code.into(),
            country_code: None,
            visibility: None,
            schema_type: None,
            customer_id: None,
        }
    }
}

/// Partial update of a schema.
///
/// Updating an active schema makes the server create a new draft version.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchemaRequest {
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub content: Patch<Map<String, Value>>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub doc_type_code: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub country_code: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub visibility: Patch<Visibility>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub schema_type: Patch<SchemaType>,
}

impl UpdateSchemaRequest {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_unchanged()
            && self.description.is_unchanged()
            && self.content.is_unchanged()
            && self.doc_type_code.is_unchanged()
            && self.country_code.is_unchanged()
            && self.visibility.is_unchanged()
            && self.schema_type.is_unchanged()
    }
}

/// Query for the most specific schema applicable to a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindBestRequest {
    pub doc_type_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

impl FindBestRequest {
    pub fn new(doc_type_code: impl Into<String>) -> Self {
        Self {
            doc_type_code: doc_type_code.into(),
            country_code: None,
            customer_id: None,
        }
    }

    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn customer(mut self, id: impl Into<String>) -> Self {
        self.customer_id = Some(id.into());
        self
    }
}

/// Result of a find-best query.
///
/// `match_type` is reported verbatim; the selection itself happens on the
/// server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindBestResponse {
    #[serde(default)]
    pub schema: Option<SchemaWithRelations>,
    #[serde(default)]
    pub match_type: Option<String>,
}
