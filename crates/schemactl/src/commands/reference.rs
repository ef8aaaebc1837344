//! Reference data command implementation.

use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::output;

pub async fn run(ctx: &Context) -> Result<()> {
    let data = ctx
        .registry
        .reference_data()
        .await
        .context("Failed to get reference data")?;

    output::emit(ctx.output, &data, |data| {
        output::heading("Document Types:");
        let rows: Vec<Vec<String>> = data
            .doc_types
            .iter()
            .map(|dt| {
                vec![
                    dt.code.clone(),
                    dt.name.clone(),
                    output::truncate(dt.description.as_deref().unwrap_or("-"), 40),
                ]
            })
            .collect();
        output::table(&["CODE", "NAME", "DESCRIPTION"], &rows);

        println!();
        output::heading("Countries:");
        let rows: Vec<Vec<String>> = data
            .countries
            .iter()
            .map(|c| vec![c.code.clone(), c.name.clone()])
            .collect();
        output::table(&["CODE", "NAME"], &rows);
    })
}
