//! Re-adding the components listed in the app config.

use crate::app_config::read_app_config;
use jetkit_types::{Options, Result, Tooling};
use std::path::Path;
use tracing::info;

/// Tooling task used to add components.
pub const ADD_TASK: &str = "add";

/// Tooling scope for components.
pub const COMPONENT_SCOPE: &str = "component";

/// Forward the configured `composites` to the tooling's `add component`.
///
/// Nothing is dispatched when the list is empty.
pub async fn add_components(app_config: &Path, tooling: &dyn Tooling) -> Result<()> {
    let specs = read_app_config(app_config).await?.component_specs();

    if specs.is_empty() {
        info!("No components to add");
        return Ok(());
    }

    info!("Adding components: {}", specs.join(", "));
    tooling
        .dispatch(ADD_TASK, COMPONENT_SCOPE, &specs, &Options::new())
        .await
}
