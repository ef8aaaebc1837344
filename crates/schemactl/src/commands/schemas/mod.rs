//! Schema subcommand implementations.

mod create;
mod documents;
mod find_best;
mod get;
mod lifecycle;
mod list;
mod update;

use std::path::Path;

use anyhow::{Context as _, Result, bail};
use clap::{Args, Subcommand};
use serde_json::{Map, Value};

use docontology::SchemaWithRelations;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SchemasCommand {
    #[command(subcommand)]
    pub command: SchemasSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SchemasSubcommand {
    /// List schemas with optional filtering
    List(list::ListArgs),

    /// Get a schema by publicId (sch_...) or publicVersionId (schv_...)
    Get(get::IdArgs),

    /// Get one specific schema version
    Version(get::VersionArgs),

    /// List all versions of a schema
    Versions(get::IdArgs),

    /// Create a new schema in draft status
    Create(create::CreateArgs),

    /// Update a schema. Updating an active schema creates a new version.
    Update(update::UpdateArgs),

    /// Transition a draft schema to active status
    Activate(get::IdArgs),

    /// Transition an active schema to deprecated status
    Deprecate(get::IdArgs),

    /// Delete a draft schema. Active schemas must be deprecated first.
    Delete(get::IdArgs),

    /// Find the best schema for a doc type and optional country
    FindBest(find_best::FindBestArgs),

    /// Upload a PDF or JPEG file to classify it and match a schema
    Match(documents::MatchArgs),

    /// Generate a JSON schema from a document or its text
    Generate(documents::GenerateArgs),
}

pub async fn handle(cmd: SchemasCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        SchemasSubcommand::List(args) => list::run(args, ctx).await,
        SchemasSubcommand::Get(args) => get::run(args, ctx).await,
        SchemasSubcommand::Version(args) => get::run_version(args, ctx).await,
        SchemasSubcommand::Versions(args) => get::run_versions(args, ctx).await,
        SchemasSubcommand::Create(args) => create::run(args, ctx).await,
        SchemasSubcommand::Update(args) => update::run(args, ctx).await,
        SchemasSubcommand::Activate(args) => lifecycle::activate(args, ctx).await,
        SchemasSubcommand::Deprecate(args) => lifecycle::deprecate(args, ctx).await,
        SchemasSubcommand::Delete(args) => lifecycle::delete(args, ctx).await,
        SchemasSubcommand::FindBest(args) => find_best::run(args, ctx).await,
        SchemasSubcommand::Match(args) => documents::run_match(args, ctx).await,
        SchemasSubcommand::Generate(args) => documents::run_generate(args, ctx).await,
    }
}

/// Parse schema content given inline or as `@path`.
///
/// The content must be a JSON object.
pub(crate) fn parse_content(raw: &str) -> Result<Map<String, Value>> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read content file {path}"))?,
        None => raw.to_string(),
    };

    let value: Value = serde_json::from_str(&text).context("Invalid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("content must be a JSON object, got {}", json_kind(&other)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Print a schema as a key/value block followed by its content.
pub(crate) fn print_schema(s: &SchemaWithRelations) {
    let schema = &s.schema;

    let doc_type = match &s.doc_type {
        Some(dt) => format!("{} ({})", dt.code, dt.name),
        None => schema.doc_type_code.clone(),
    };
    let country = match (&s.country, &schema.country_code) {
        (Some(c), _) => format!("{} ({})", c.code, c.name),
        (None, Some(code)) => code.clone(),
        (None, None) => "-".to_string(),
    };

    output::fields(&[
        ("ID", schema.public_id.clone()),
        ("Version ID", schema.public_version_id.clone()),
        ("Name", schema.name.clone()),
        ("Description", output::or_dash(schema.description.as_deref())),
        ("Version", schema.version.to_string()),
        ("Status", schema.status.to_string()),
        ("Doc Type", doc_type),
        ("Country", country),
        ("Visibility", schema.visibility.to_string()),
        ("Schema Type", schema.schema_type.to_string()),
        ("Customer ID", output::or_dash(schema.customer_id.as_deref())),
        ("Created At", output::timestamp(&schema.created_at)),
        ("Updated At", output::timestamp(&schema.updated_at)),
    ]);

    println!();
    println!("Content:");
    match output::indented_json(&schema.content) {
        Ok(content) => println!("{content}"),
        Err(err) => output::error(&format!("Failed to render content: {err}")),
    }
}
