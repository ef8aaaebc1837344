//! Schema status transitions and deletion.
//!
//! The server enforces `draft -> active -> deprecated`; invalid transitions
//! come back as API errors.

use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::output;

use super::get::IdArgs;

pub async fn activate(args: IdArgs, ctx: &Context) -> Result<()> {
    let schema = ctx
        .registry
        .activate_schema(&args.id)
        .await
        .with_context(|| format!("Failed to activate schema {}", args.id))?;

    output::emit(ctx.output, &schema, |s| {
        output::success(&format!("Schema activated: {}", s.schema.public_id));
    })
}

pub async fn deprecate(args: IdArgs, ctx: &Context) -> Result<()> {
    let schema = ctx
        .registry
        .deprecate_schema(&args.id)
        .await
        .with_context(|| format!("Failed to deprecate schema {}", args.id))?;

    output::emit(ctx.output, &schema, |s| {
        output::success(&format!("Schema deprecated: {}", s.schema.public_id));
    })
}

pub async fn delete(args: IdArgs, ctx: &Context) -> Result<()> {
    ctx.registry
        .delete_schema(&args.id)
        .await
        .with_context(|| format!("Failed to delete schema {}", args.id))?;

    output::success(&format!("Schema deleted: {}", args.id));
    Ok(())
}
