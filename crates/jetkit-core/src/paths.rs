//! Locations of the project files jetkit reads and writes.

use crate::config::ToolConfig;
use crate::util::fs::{path_exists, resolve_against};
use std::path::{Path, PathBuf};

/// Project-relative paths, resolved against one project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
    app_config: PathBuf,
    hooks_config: PathBuf,
    hybrid_staging: PathBuf,
    hybrid_marker: String,
}

impl ProjectPaths {
    /// Resolve the configured locations against `root`.
    pub fn new(root: impl AsRef<Path>, config: &ToolConfig) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            app_config: resolve_against(&root, &config.app_config_file),
            hooks_config: resolve_against(&root, &config.hooks_config_file),
            hybrid_staging: resolve_against(&root, &config.hybrid_staging),
            hybrid_marker: config.hybrid_marker.clone(),
            root,
        }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Application config file (`oraclejetconfig.json`).
    pub fn app_config(&self) -> &Path {
        &self.app_config
    }

    /// Hooks config file.
    pub fn hooks_config(&self) -> &Path {
        &self.hooks_config
    }

    /// Hybrid staging directory.
    pub fn hybrid_staging(&self) -> &Path {
        &self.hybrid_staging
    }

    /// Marker whose presence makes a project hybrid.
    pub fn hybrid_marker(&self) -> PathBuf {
        self.hybrid_staging.join(&self.hybrid_marker)
    }

    /// Web root inside the staging directory.
    pub fn hybrid_www(&self) -> PathBuf {
        self.hybrid_staging.join("www")
    }

    /// Resolve a path from a project file against the root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve_against(&self.root, path)
    }

    /// A directory is a project root when it carries the app config file.
    pub async fn is_project_root(&self) -> bool {
        path_exists(&self.app_config).await
    }
}
