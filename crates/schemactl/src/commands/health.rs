//! Health command implementation.

use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::output;

pub async fn run(ctx: &Context) -> Result<()> {
    let health = ctx
        .registry
        .health()
        .await
        .context("Failed to check API health")?;

    output::emit(ctx.output, &health, |health| {
        let status = if health.is_ok() { "OK" } else { "ERROR" };
        let database = if health.is_database_connected() {
            "Connected"
        } else {
            "Disconnected"
        };

        output::fields(&[
            ("Status", status.to_string()),
            ("Database", database.to_string()),
            ("Timestamp", output::timestamp(&health.timestamp)),
        ]);
    })
}
