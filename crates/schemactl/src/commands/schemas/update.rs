//! Update schema command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;

use docontology::{Patch, SchemaType, UpdateSchemaRequest, Visibility};

use crate::context::Context;
use crate::output;

use super::parse_content;

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Schema publicId (sch_...)
    pub id: String,

    /// Schema name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Doc type code
    #[arg(short = 't', long)]
    pub doc_type: Option<String>,

    /// JSON schema content, or @path to read it from a file
    #[arg(long)]
    pub content: Option<String>,

    /// Schema description (an empty value clears it)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Country code (an empty value clears it)
    #[arg(short, long)]
    pub country: Option<String>,

    /// Visibility (public, community, private)
    #[arg(long)]
    pub visibility: Option<Visibility>,

    /// Schema type (standard, regex)
    #[arg(long)]
    pub schema_type: Option<SchemaType>,
}

impl UpdateArgs {
    /// Build the patch; blank name, doc type and content flags are ignored.
    fn to_request(&self) -> Result<UpdateSchemaRequest> {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        let content = match non_empty(&self.content) {
            Some(raw) => Patch::Set(parse_content(&raw).context("Invalid content")?),
            None => Patch::Unchanged,
        };

        Ok(UpdateSchemaRequest {
            name: non_empty(&self.name).into(),
            description: self.description.clone().into(),
            content,
            doc_type_code: non_empty(&self.doc_type).into(),
            country_code: self.country.clone().into(),
            visibility: self.visibility.into(),
            schema_type: self.schema_type.into(),
        })
    }
}

pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let request = args.to_request()?;
    if request.is_empty() {
        bail!("no update fields provided");
    }

    let schema = ctx
        .registry
        .update_schema(&args.id, &request)
        .await
        .with_context(|| format!("Failed to update schema {}", args.id))?;

    output::emit(ctx.output, &schema, |s| {
        output::success(&format!(
            "Schema updated: {} (version: {})",
            s.schema.public_id, s.schema.public_version_id
        ));
    })
}
