//! Scaffold a new application.

use crate::context::AppContext;
use anyhow::Result;
use jetkit_types::{Options, Outcome};
use serde_json::Value;

pub async fn execute(
    ctx: &AppContext,
    name: Option<&str>,
    hybrid: bool,
    web: bool,
    mut options: Options,
) -> Result<Outcome> {
    if hybrid {
        options.insert("hybrid".to_string(), Value::Bool(true));
    }
    if web {
        options.insert("web".to_string(), Value::Bool(true));
    }

    Ok(ctx.dispatcher().create(name, options).await)
}
