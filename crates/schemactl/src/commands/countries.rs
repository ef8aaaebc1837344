//! Country subcommands.

use anyhow::{Context as _, Result, bail};
use clap::{Args, Subcommand};

use docontology::{Country, CreateCountryRequest, UpdateCountryRequest};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct CountriesCommand {
    #[command(subcommand)]
    pub command: CountriesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CountriesSubcommand {
    /// List countries
    List(ListArgs),

    /// Get a country by its ISO code
    Get(CodeArgs),

    /// Create a country
    Create(CreateArgs),

    /// Update a country's name or active status
    Update(UpdateArgs),

    /// Soft delete a country (sets isActive to false)
    Delete(CodeArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Include inactive countries
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct CodeArgs {
    /// ISO 3166-1 alpha-2 code (e.g. PT)
    pub code: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// ISO 3166-1 alpha-2 code
    pub code: String,

    /// Country name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// ISO 3166-1 alpha-2 code
    pub code: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Set active status
    #[arg(long, value_name = "BOOL")]
    pub active: Option<bool>,
}

pub async fn handle(cmd: CountriesCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        CountriesSubcommand::List(args) => list(args, ctx).await,
        CountriesSubcommand::Get(args) => get(args, ctx).await,
        CountriesSubcommand::Create(args) => create(args, ctx).await,
        CountriesSubcommand::Update(args) => update(args, ctx).await,
        CountriesSubcommand::Delete(args) => delete(args, ctx).await,
    }
}

async fn list(args: ListArgs, ctx: &Context) -> Result<()> {
    let countries = ctx
        .registry
        .list_countries(args.all)
        .await
        .context("Failed to list countries")?;

    output::emit(ctx.output, &countries, |countries| {
        if countries.is_empty() {
            output::note("No countries found.");
            return;
        }
        let rows: Vec<Vec<String>> = countries
            .iter()
            .map(|c| vec![c.code.clone(), c.name.clone(), output::yes_no(c.is_active)])
            .collect();
        output::table(&["CODE", "NAME", "ACTIVE"], &rows);
    })
}

async fn get(args: CodeArgs, ctx: &Context) -> Result<()> {
    let country = ctx
        .registry
        .get_country(&args.code)
        .await
        .with_context(|| format!("Failed to get country {}", args.code))?;

    output::emit(ctx.output, &country, print_country)
}

async fn create(args: CreateArgs, ctx: &Context) -> Result<()> {
    let request = CreateCountryRequest {
        code: args.code,
        name: args.name,
    };

    let country = ctx
        .registry
        .create_country(&request)
        .await
        .with_context(|| format!("Failed to create country {}", request.code))?;

    output::emit(ctx.output, &country, |c| {
        output::success(&format!("Country created: {}", c.code));
    })
}

async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let request = UpdateCountryRequest {
        name: args.name.filter(|n| !n.is_empty()).into(),
        is_active: args.active.into(),
    };
    if request.is_empty() {
        bail!("no update fields provided");
    }

    let country = ctx
        .registry
        .update_country(&args.code, &request)
        .await
        .with_context(|| format!("Failed to update country {}", args.code))?;

    output::emit(ctx.output, &country, |c| {
        output::success(&format!("Country updated: {}", c.code));
    })
}

async fn delete(args: CodeArgs, ctx: &Context) -> Result<()> {
    ctx.registry
        .delete_country(&args.code)
        .await
        .with_context(|| format!("Failed to delete country {}", args.code))?;

    output::success(&format!("Country deleted: {}", args.code));
    Ok(())
}

fn print_country(c: &Country) {
    output::fields(&[
        ("Code", c.code.clone()),
        ("Name", c.name.clone()),
        ("Active", output::yes_no(c.is_active)),
        ("Created At", output::timestamp(&c.created_at)),
        ("Updated At", output::timestamp(&c.updated_at)),
    ]);
}
