//! Dependency installation step.

use jetkit_types::{PackageManager, Result};
use std::path::Path;
use tracing::info;

/// Install the project's dependencies.
pub async fn install_dependencies(project_root: &Path, package_manager: &dyn PackageManager) -> Result<()> {
    info!("Performing '{} install', please wait...", package_manager.name());
    package_manager.install(project_root).await?;
    info!("Dependencies installed");
    Ok(())
}
