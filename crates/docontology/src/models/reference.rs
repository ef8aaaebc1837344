//! Document types, countries and the service status records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Patch;

/// A document classification code (e.g. `Invoice`, `Receipt`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocType {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A country, identified by its ISO 3166-1 alpha-2 code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// All active document types and countries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    #[serde(default)]
    pub doc_types: Vec<DocType>,
    #[serde(default)]
    pub countries: Vec<Country>,
}

/// Response from the health endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub database: String,
    pub timestamp: DateTime<Utc>,
}

impl Health {
    /// True when the service reports itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// True when the service reports a live database connection.
    pub fn is_database_connected(&self) -> bool {
        self.database == "connected"
    }
}

/// Request body for creating a document type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocTypeRequest {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update of a document type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocTypeRequest {
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub is_active: Patch<bool>,
}

impl UpdateDocTypeRequest {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_unchanged() && self.description.is_unchanged() && self.is_active.is_unchanged()
    }
}

/// Request body for creating a country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateCountryRequest {
    pub code: String,
    pub name: String,
}

/// Partial update of a country.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryRequest {
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub is_active: Patch<bool>,
}

impl UpdateCountryRequest {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_unchanged() && self.is_active.is_unchanged()
    }
}
