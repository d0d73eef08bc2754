//! Wiring of configuration, project paths and service clients for one invocation.

use crate::ui::progress::LookupSpinner;
use anyhow::{Context, Result};
use jetkit_core::util::fs::absolutize;
use jetkit_core::{ProjectPaths, ToolConfig};
use jetkit_generator::{Dispatcher, GeneratorEnv};
use jetkit_restore::{Restore, RestoreBuilder, ScriptHookLoader};
use jetkit_services::{CordovaClient, NpmClient, ToolingClient, YeomanClient};
use jetkit_types::GeneratorRuntime;
use std::path::Path;
use std::sync::Arc;

/// Everything a command needs, resolved once.
pub struct AppContext {
    config: ToolConfig,
    paths: ProjectPaths,
    interactive: bool,
}

impl AppContext {
    /// Load the tool configuration and resolve the project root.
    pub fn load(project_root: Option<&Path>, interactive: bool) -> Result<Self> {
        let config = ToolConfig::load().context("Failed to load jetkit configuration")?;
        let root = match project_root {
            Some(root) => absolutize(root)
                .with_context(|| format!("Failed to resolve project root {}", root.display()))?,
            None => std::env::current_dir().context("Failed to determine the current directory")?,
        };

        Ok(Self {
            paths: ProjectPaths::new(&root, &config),
            config,
            interactive,
        })
    }

    /// Restore pipeline backed by the configured programs.
    pub fn restore(&self) -> Result<Restore> {
        let root = self.paths.root();
        let restore = RestoreBuilder::new()
            .paths(self.paths.clone())
            .package_manager(Arc::new(NpmClient::new(&self.config.package_manager)))
            .tooling(Arc::new(ToolingClient::new(&self.config.tooling_command, root)))
            .platform(Arc::new(CordovaClient::new(
                &self.config.platform_toolchain,
                self.config.prepare_max_buffer,
            )))
            .hooks(Arc::new(ScriptHookLoader::new(root)))
            .build()?;
        Ok(restore)
    }

    /// Generator/tooling dispatcher backed by the configured programs.
    pub fn dispatcher(&self) -> Dispatcher {
        let root = self.paths.root();
        let yeoman: Arc<dyn GeneratorRuntime> =
            Arc::new(YeomanClient::new(&self.config.generator_runtime, root));
        let runtime: Arc<dyn GeneratorRuntime> = if self.interactive {
            Arc::new(LookupSpinner::new(yeoman))
        } else {
            yeoman
        };

        let env = GeneratorEnv::new(runtime, &self.config.generator_namespace);
        let tooling = Arc::new(ToolingClient::new(&self.config.tooling_command, root));

        Dispatcher::new(env, tooling, self.paths.clone())
    }
}
