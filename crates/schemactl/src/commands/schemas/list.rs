//! List schemas command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use docontology::{ListSchemasOptions, Status, Visibility};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by status (draft, active, deprecated)
    #[arg(long)]
    pub status: Option<Status>,

    /// Filter by doc type code
    #[arg(short = 't', long)]
    pub doc_type: Option<String>,

    /// Filter by country code
    #[arg(short, long)]
    pub country: Option<String>,

    /// Filter by visibility (public, community, private)
    #[arg(long)]
    pub visibility: Option<Visibility>,

    /// Filter by customer ID
    #[arg(long)]
    pub customer_id: Option<String>,

    /// Number of items to return
    #[arg(long, default_value_t = 50)]
    pub limit: u32,

    /// Number of items to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

impl ListArgs {
    fn to_options(&self) -> ListSchemasOptions {
        ListSchemasOptions {
            status: self.status,
            doc_type_code: self.doc_type.clone(),
            country_code: self.country.clone(),
            visibility: self.visibility,
            customer_id: self.customer_id.clone(),
            limit: Some(self.limit),
            offset: Some(self.offset),
        }
    }
}

pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let page = ctx
        .registry
        .list_schemas(&args.to_options())
        .await
        .context("Failed to list schemas")?;

    output::emit(ctx.output, &page, |page| {
        if page.is_empty() {
            output::note("No schemas found.");
            return;
        }

        let rows: Vec<Vec<String>> = page
            .data
            .iter()
            .map(|s| {
                let s = &s.schema;
                vec![
                    s.public_id.clone(),
                    s.public_version_id.clone(),
                    output::truncate(&s.name, 30),
                    s.doc_type_code.clone(),
                    output::or_dash(s.country_code.as_deref()),
                    s.status.to_string(),
                    s.version.to_string(),
                    s.visibility.to_string(),
                ]
            })
            .collect();
        output::table(
            &[
                "ID",
                "VERSION ID",
                "NAME",
                "DOC TYPE",
                "COUNTRY",
                "STATUS",
                "VER",
                "VISIBILITY",
            ],
            &rows,
        );

        if page.has_more() {
            println!();
            println!(
                "Showing {} of {} schemas (use --offset to see more)",
                page.data.len(),
                page.total()
            );
        }
    })
}
