//! Route segments for the registry API.

/// `/health`
pub const HEALTH: &str = "health";

/// `/reference-data`
pub const REFERENCE_DATA: &str = "reference-data";

/// Prefix for administrative endpoints.
pub const ADMIN: &str = "admin";

/// `/doc-types`, `/admin/doc-types`
pub const DOC_TYPES: &str = "doc-types";

/// `/countries`, `/admin/countries`
pub const COUNTRIES: &str = "countries";

/// `/admin/schemas`, `/schemas/...`
pub const SCHEMAS: &str = "schemas";

/// `/admin/schemas/versions/{versionId}`, `/admin/schemas/{id}/versions`
pub const VERSIONS: &str = "versions";

/// `/admin/schemas/{id}/activate`
pub const ACTIVATE: &str = "activate";

/// `/admin/schemas/{id}/deprecate`
pub const DEPRECATE: &str = "deprecate";

/// `/schemas/find-best`
pub const FIND_BEST: &str = "find-best";

/// `/schemas/extract`
pub const EXTRACT: &str = "extract";

/// `/schemas/generate`
pub const GENERATE: &str = "generate";
