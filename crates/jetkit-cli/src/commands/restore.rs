//! Restore a checked-out project.

use crate::context::AppContext;
use anyhow::{Context, Result};
use jetkit_types::Outcome;

pub async fn execute(ctx: &AppContext) -> Result<Outcome> {
    let restore = ctx.restore().context("Failed to set up restore")?;
    Ok(restore.run().await)
}
