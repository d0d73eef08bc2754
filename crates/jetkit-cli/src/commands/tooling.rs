//! Forward a task to the build tooling.

use crate::context::AppContext;
use anyhow::Result;
use jetkit_types::{Options, Outcome};

pub async fn execute(
    ctx: &AppContext,
    task: &str,
    scope: &str,
    parameters: &[String],
    options: Options,
) -> Result<Outcome> {
    Ok(ctx.dispatcher().run_tooling(task, scope, parameters, options).await)
}
