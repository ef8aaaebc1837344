//! Document type subcommands.

use anyhow::{Context as _, Result, bail};
use clap::{Args, Subcommand};

use docontology::{CreateDocTypeRequest, DocType, UpdateDocTypeRequest};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct DocTypesCommand {
    #[command(subcommand)]
    pub command: DocTypesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DocTypesSubcommand {
    /// List document types
    List(ListArgs),

    /// Get a document type by its code
    Get(CodeArgs),

    /// Create a document type
    Create(CreateArgs),

    /// Update a document type's name, description or active status
    Update(UpdateArgs),

    /// Soft delete a document type (sets isActive to false)
    Delete(CodeArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Include inactive doc types
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct CodeArgs {
    /// Doc type code (e.g. Invoice)
    pub code: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Doc type code
    pub code: String,

    /// Display name
    pub name: String,

    /// Doc type description
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Doc type code
    pub code: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New description (an empty value clears it)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Set active status
    #[arg(long, value_name = "BOOL")]
    pub active: Option<bool>,
}

impl UpdateArgs {
    fn to_request(&self) -> UpdateDocTypeRequest {
        UpdateDocTypeRequest {
            name: self.name.clone().filter(|n| !n.is_empty()).into(),
            description: self.description.clone().into(),
            is_active: self.active.into(),
        }
    }
}

pub async fn handle(cmd: DocTypesCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        DocTypesSubcommand::List(args) => list(args, ctx).await,
        DocTypesSubcommand::Get(args) => get(args, ctx).await,
        DocTypesSubcommand::Create(args) => create(args, ctx).await,
        DocTypesSubcommand::Update(args) => update(args, ctx).await,
        DocTypesSubcommand::Delete(args) => delete(args, ctx).await,
    }
}

async fn list(args: ListArgs, ctx: &Context) -> Result<()> {
    let doc_types = ctx
        .registry
        .list_doc_types(args.all)
        .await
        .context("Failed to list doc types")?;

    output::emit(ctx.output, &doc_types, |doc_types| {
        if doc_types.is_empty() {
            output::note("No doc types found.");
            return;
        }
        let rows: Vec<Vec<String>> = doc_types
            .iter()
            .map(|dt| {
                vec![
                    dt.code.clone(),
                    dt.name.clone(),
                    output::truncate(dt.description.as_deref().unwrap_or("-"), 40),
                    output::yes_no(dt.is_active),
                ]
            })
            .collect();
        output::table(&["CODE", "NAME", "DESCRIPTION", "ACTIVE"], &rows);
    })
}

async fn get(args: CodeArgs, ctx: &Context) -> Result<()> {
    let doc_type = ctx
        .registry
        .get_doc_type(&args.code)
        .await
        .with_context(|| format!("Failed to get doc type {}", args.code))?;

    output::emit(ctx.output, &doc_type, print_doc_type)
}

async fn create(args: CreateArgs, ctx: &Context) -> Result<()> {
    let request = CreateDocTypeRequest {
        code: args.code,
        name: args.name,
        description: args.description.filter(|d| !d.is_empty()),
    };

    let doc_type = ctx
        .registry
        .create_doc_type(&request)
        .await
        .with_context(|| format!("Failed to create doc type {}", request.code))?;

    output::emit(ctx.output, &doc_type, |dt| {
        output::success(&format!("Doc type created: {}", dt.code));
    })
}

async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let request = args.to_request();
    if request.is_empty() {
        bail!("no update fields provided");
    }

    let doc_type = ctx
        .registry
        .update_doc_type(&args.code, &request)
        .await
        .with_context(|| format!("Failed to update doc type {}", args.code))?;

    output::emit(ctx.output, &doc_type, |dt| {
        output::success(&format!("Doc type updated: {}", dt.code));
    })
}

async fn delete(args: CodeArgs, ctx: &Context) -> Result<()> {
    ctx.registry
        .delete_doc_type(&args.code)
        .await
        .with_context(|| format!("Failed to delete doc type {}", args.code))?;

    output::success(&format!("Doc type deleted: {}", args.code));
    Ok(())
}

fn print_doc_type(dt: &DocType) {
    output::fields(&[
        ("Code", dt.code.clone()),
        ("Name", dt.name.clone()),
        ("Description", output::or_dash(dt.description.as_deref())),
        ("Active", output::yes_no(dt.is_active)),
        ("Created At", output::timestamp(&dt.created_at)),
        ("Updated At", output::timestamp(&dt.updated_at)),
    ]);
}
