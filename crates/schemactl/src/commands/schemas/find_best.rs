//! Find-best command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use docontology::FindBestRequest;

use crate::context::Context;
use crate::output;

use super::print_schema;

#[derive(Args, Debug)]
pub struct FindBestArgs {
    /// Doc type code
    #[arg(short = 't', long)]
    pub doc_type: String,

    /// Country code
    #[arg(short, long)]
    pub country: Option<String>,

    /// Customer ID, to include that customer's private schemas
    #[arg(long)]
    pub customer_id: Option<String>,
}

pub async fn run(args: FindBestArgs, ctx: &Context) -> Result<()> {
    let mut request = FindBestRequest::new(&args.doc_type);
    if let Some(country) = args.country.filter(|c| !c.is_empty()) {
        request = request.country(country);
    }
    if let Some(customer) = args.customer_id.filter(|c| !c.is_empty()) {
        request = request.customer(customer);
    }

    let result = ctx
        .registry
        .find_best_schema(&request)
        .await
        .with_context(|| format!("Failed to find schema for {}", args.doc_type))?;

    output::emit(ctx.output, &result, |result| match &result.schema {
        Some(schema) => {
            output::fields(&[(
                "Match type",
                result.match_type.clone().unwrap_or_else(|| "unknown".into()),
            )]);
            println!();
            print_schema(schema);
        }
        None => println!("No matching schema found"),
    })
}
