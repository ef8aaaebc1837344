//! Create schema command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use docontology::{CreateSchemaRequest, SchemaType, Visibility};

use crate::context::Context;
use crate::output;

use super::parse_content;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Schema name
    #[arg(short, long)]
    pub name: String,

    /// Doc type code
    #[arg(short = 't', long)]
    pub doc_type: String,

    /// JSON schema content, or @path to read it from a file
    #[arg(long)]
    pub content: String,

    /// Schema description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Country code
    #[arg(short, long)]
    pub country: Option<String>,

    /// Visibility (public, community, private)
    #[arg(long, default_value = "private")]
    pub visibility: Visibility,

    /// Schema type (standard, regex)
    #[arg(long, default_value = "standard")]
    pub schema_type: SchemaType,

    /// Customer ID owning a private schema
    #[arg(long)]
    pub customer_id: Option<String>,
}

impl CreateArgs {
    fn to_request(&self) -> Result<CreateSchemaRequest> {
        let content = parse_content(&self.content).context("Invalid content")?;

        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        let mut request = CreateSchemaRequest::new(&self.name, &self.doc_type, content);
        request.description = non_empty(&self.description);
        request.country_code = non_empty(&self.country);
        request.visibility = Some(self.visibility);
        request.schema_type = Some(self.schema_type);
        request.customer_id = non_empty(&self.customer_id);
        Ok(request)
    }
}

pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    let request = args.to_request()?;

    let schema = ctx
        .registry
        .create_schema(&request)
        .await
        .with_context(|| format!("Failed to create schema {}", request.name))?;

    output::emit(ctx.output, &schema, |s| {
        output::success(&format!(
            "Schema created: {} (version: {})",
            s.schema.public_id, s.schema.public_version_id
        ));
    })
}
