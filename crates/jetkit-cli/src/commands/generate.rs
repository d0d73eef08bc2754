//! Run a named generator.

use crate::context::AppContext;
use anyhow::Result;
use jetkit_types::{Options, Outcome};

pub async fn execute(
    ctx: &AppContext,
    generator: &str,
    parameter: Option<&str>,
    options: Options,
) -> Result<Outcome> {
    Ok(ctx
        .dispatcher()
        .delegate_to_generator(generator, parameter, options)
        .await)
}
