//! Schema lookup commands: get, version and versions.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::context::Context;
use crate::output;

use super::print_schema;

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Schema publicId (sch_...) or publicVersionId (schv_...)
    pub id: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Schema publicVersionId (schv_...)
    pub version_id: String,
}

pub async fn run(args: IdArgs, ctx: &Context) -> Result<()> {
    let schema = ctx
        .registry
        .get_schema(&args.id)
        .await
        .with_context(|| format!("Failed to get schema {}", args.id))?;

    output::emit(ctx.output, &schema, print_schema)
}

pub async fn run_version(args: VersionArgs, ctx: &Context) -> Result<()> {
    let schema = ctx
        .registry
        .get_schema_version(&args.version_id)
        .await
        .with_context(|| format!("Failed to get schema version {}", args.version_id))?;

    output::emit(ctx.output, &schema, print_schema)
}

pub async fn run_versions(args: IdArgs, ctx: &Context) -> Result<()> {
    let versions = ctx
        .registry
        .list_schema_versions(&args.id)
        .await
        .with_context(|| format!("Failed to list versions of schema {}", args.id))?;

    output::emit(ctx.output, &versions, |versions| {
        if versions.is_empty() {
            output::note("No versions found.");
            return;
        }
        let rows: Vec<Vec<String>> = versions
            .iter()
            .map(|v| {
                vec![
                    v.schema.public_version_id.clone(),
                    v.schema.version.to_string(),
                    v.schema.status.to_string(),
                    output::timestamp(&v.schema.created_at),
                ]
            })
            .collect();
        output::table(&["VERSION ID", "VERSION", "STATUS", "CREATED AT"], &rows);
    })
}
