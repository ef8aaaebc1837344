//! Typed records exchanged with the registry.

mod document;
mod page;
mod reference;
mod schema;

pub use document::{
    Classification, GenerateRequest, GenerateResponse, GenerateSource, GeneratedSchema,
    MatchResponse, MatchedSchema,
};
pub use page::{Page, Pagination};
pub use reference::{
    Country, CreateCountryRequest, CreateDocTypeRequest, DocType, Health, ReferenceData,
    UpdateCountryRequest, UpdateDocTypeRequest,
};
pub use schema::{
    CreateSchemaRequest, FindBestRequest, FindBestResponse, ListSchemasOptions, Schema,
    SchemaType, SchemaWithRelations, Status, UpdateSchemaRequest, Visibility,
};
