//! The restore pipeline.

use crate::app_config::write_app_config;
use crate::components::add_components;
use crate::hook::run_after_app_restore;
use crate::installer::install_dependencies;
use crate::platform::prepare_platform;
use jetkit_core::util::fs::path_exists;
use jetkit_core::ProjectPaths;
use jetkit_types::{
    HookLoader, JetkitError, Outcome, PackageManager, PlatformToolchain, RestoreType, Result,
    Tooling,
};
use std::sync::Arc;
use tracing::{error, info};

/// Restores a checked-out project: install, config, components, platform, hook.
pub struct Restore {
    paths: ProjectPaths,
    version: String,
    package_manager: Arc<dyn PackageManager>,
    tooling: Arc<dyn Tooling>,
    platform: Arc<dyn PlatformToolchain>,
    hooks: Arc<dyn HookLoader>,
}

impl Restore {
    /// Probe the hybrid marker to pick the restore flavour.
    pub async fn restore_type(&self) -> RestoreType {
        RestoreType::from_marker(path_exists(self.paths.hybrid_marker()).await)
    }

    /// Run the whole restore.
    ///
    /// Never returns an error: the first failing step stops the pipeline, is
    /// logged, and turns into `Outcome::Failed`.
    pub async fn run(&self) -> Outcome {
        let restore_type = self.restore_type().await;
        info!("Restoring {} application in {}", restore_type, self.paths.root().display());

        match self.pipeline(restore_type).await {
            Ok(()) => {
                info!("Restore complete");
                Outcome::Succeeded
            }
            Err(e) => {
                error!("{}", e);
                Outcome::Failed
            }
        }
    }

    async fn pipeline(&self, restore_type: RestoreType) -> Result<()> {
        install_dependencies(self.paths.root(), self.package_manager.as_ref()).await?;
        write_app_config(self.paths.app_config(), &self.version).await?;
        add_components(self.paths.app_config(), self.tooling.as_ref()).await?;
        if restore_type.needs_platform_prepare() {
            prepare_platform(&self.paths, self.platform.as_ref()).await?;
        }
        run_after_app_restore(&self.paths, self.hooks.as_ref()).await
    }
}

/// Builder for `Restore`.
pub struct RestoreBuilder {
    paths: Option<ProjectPaths>,
    version: String,
    package_manager: Option<Arc<dyn PackageManager>>,
    tooling: Option<Arc<dyn Tooling>>,
    platform: Option<Arc<dyn PlatformToolchain>>,
    hooks: Option<Arc<dyn HookLoader>>,
}

impl RestoreBuilder {
    /// Create new restore builder.
    pub fn new() -> Self {
        Self {
            paths: None,
            version: jetkit_core::VERSION.to_string(),
            package_manager: None,
            tooling: None,
            platform: None,
            hooks: None,
        }
    }

    /// Set project paths.
    pub fn paths(mut self, paths: ProjectPaths) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Override the version recorded in the app config.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set package manager.
    pub fn package_manager(mut self, package_manager: Arc<dyn PackageManager>) -> Self {
        self.package_manager = Some(package_manager);
        self
    }

    /// Set tooling.
    pub fn tooling(mut self, tooling: Arc<dyn Tooling>) -> Self {
        self.tooling = Some(tooling);
        self
    }

    /// Set platform toolchain.
    pub fn platform(mut self, platform: Arc<dyn PlatformToolchain>) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Set hook loader.
    pub fn hooks(mut self, hooks: Arc<dyn HookLoader>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Build the restore.
    pub fn build(self) -> Result<Restore> {
        fn missing(what: &str) -> JetkitError {
            JetkitError::Config(format!("Restore requires a {}", what))
        }

        Ok(Restore {
            paths: self.paths.ok_or_else(|| missing("project path set"))?,
            version: self.version,
            package_manager: self.package_manager.ok_or_else(|| missing("package manager"))?,
            tooling: self.tooling.ok_or_else(|| missing("tooling dispatcher"))?,
            platform: self.platform.ok_or_else(|| missing("platform toolchain"))?,
            hooks: self.hooks.ok_or_else(|| missing("hook loader"))?,
        })
    }
}

impl Default for RestoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
