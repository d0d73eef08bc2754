//! Configuration management for jetkit.
//!
//! This module provides layered configuration for the tool itself (which
//! programs to drive, where project files live):
//! - Built-in defaults
//! - File-based configuration (YAML)
//! - Environment variable overrides
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables (`JETKIT_<KEY>`)
//! 2. Values loaded from file
//! 3. Default values
//!
//! ## Example
//!
//! ```no_run
//! use jetkit_core::config::ToolConfig;
//!
//! let config = ToolConfig::load()?;
//! assert_eq!(config.hybrid_marker, "config.xml");
//! # Ok::<(), jetkit_core::JetkitError>(())
//! ```

use crate::util::data::deep_merge;
use jetkit_types::{JetkitError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of environment variables that override configuration keys.
pub const ENV_PREFIX: &str = "JETKIT_";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_VAR: &str = "JETKIT_CONFIG";

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values from environment variables
    Environment = 2,
}

impl ConfigLayer {
    const LOWEST_FIRST: [ConfigLayer; 3] = [
        ConfigLayer::Default,
        ConfigLayer::Loaded,
        ConfigLayer::Environment,
    ];
}

/// Layered configuration store.
///
/// This is the low-level configuration type; `ToolConfig` is the typed view
/// the rest of jetkit uses.
#[derive(Clone, Debug, Default)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
}

impl Config {
    /// Create a configuration backed by a YAML file.
    ///
    /// If the file doesn't exist, the loaded layer stays empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut layers = HashMap::new();

        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| JetkitError::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;

            let value: Value = serde_yaml::from_str(&content)
                .map_err(|e| JetkitError::Config(format!("Failed to parse config {}: {}", path.display(), e)))?;

            // An empty document parses to null
            if !value.is_null() {
                layers.insert(ConfigLayer::Loaded, value);
            }
        }

        Ok(Self { layers })
    }

    /// Install the default layer.
    pub fn with_defaults(mut self, defaults: &impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(defaults)
            .map_err(|e| JetkitError::Config(format!("Failed to serialize defaults: {}", e)))?;
        self.layers.insert(ConfigLayer::Default, value);
        Ok(self)
    }

    /// Populate the environment layer from the process environment.
    pub fn with_env_prefix(self, prefix: &str) -> Self {
        self.with_env_vars(prefix, std::env::vars())
    }

    /// Populate the environment layer from `vars`.
    ///
    /// `PREFIX_SOME_KEY=value` sets `some_key`. Values that parse as JSON
    /// (numbers, booleans) keep that type, everything else is a string.
    pub fn with_env_vars(
        mut self,
        prefix: &str,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut layer = serde_json::Map::new();
        for (name, raw) in vars {
            let Some(key) = name.strip_prefix(prefix) else {
                continue;
            };
            if key.is_empty() || name == CONFIG_PATH_VAR {
                continue;
            }
            let value = serde_json::from_str::<Value>(&raw)
                .ok()
                .filter(|v| v.is_number() || v.is_boolean())
                .unwrap_or(Value::String(raw));
            layer.insert(key.to_lowercase(), value);
        }

        if !layer.is_empty() {
            self.layers.insert(ConfigLayer::Environment, Value::Object(layer));
        }
        self
    }

    /// Merged data from all layers, highest priority winning.
    pub fn merged_data(&self) -> Value {
        let mut merged = Value::Object(serde_json::Map::new());

        for layer in &ConfigLayer::LOWEST_FIRST {
            if let Some(data) = self.layers.get(layer) {
                merged = deep_merge(merged, data.clone());
            }
        }

        merged
    }
}

/// Tool-wide jetkit configuration (`~/.jetkit/config`).
///
/// Names the external programs jetkit drives and the project-relative
/// locations of the files it reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Package manager used for `install`
    pub package_manager: String,

    /// Mobile platform toolchain used for `prepare`
    pub platform_toolchain: String,

    /// Generator runtime executable
    pub generator_runtime: String,

    /// Namespace of the scaffolding generators
    pub generator_namespace: String,

    /// Build tooling executable (`add`, `build`, `serve`, ...)
    pub tooling_command: String,

    /// Application config file, relative to the project root
    pub app_config_file: PathBuf,

    /// Hooks config file, relative to the project root
    pub hooks_config_file: PathBuf,

    /// Hybrid staging directory, relative to the project root
    pub hybrid_staging: PathBuf,

    /// Marker file inside the staging directory that flags a hybrid project
    pub hybrid_marker: String,

    /// Output limit in bytes for the platform prepare command, per stream
    pub prepare_max_buffer: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            package_manager: "npm".to_string(),
            platform_toolchain: "cordova".to_string(),
            generator_runtime: "yo".to_string(),
            generator_namespace: "@oracle/oraclejet".to_string(),
            tooling_command: "oraclejet-tooling".to_string(),
            app_config_file: PathBuf::from("oraclejetconfig.json"),
            hooks_config_file: PathBuf::from("scripts/hooks/hooks.json"),
            hybrid_staging: PathBuf::from("hybrid"),
            hybrid_marker: "config.xml".to_string(),
            prepare_max_buffer: 1024 * 20000,
        }
    }
}

impl ToolConfig {
    /// Load the tool configuration from its default location.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load the tool configuration from a specific file, with environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::load(path)?
            .with_defaults(&ToolConfig::default())?
            .with_env_prefix(ENV_PREFIX);
        Self::from_config(&config)
    }

    /// Typed view of a layered configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        serde_json::from_value(config.merged_data())
            .map_err(|e| JetkitError::Config(format!("Failed to parse tool config: {}", e)))
    }

    /// Get the default path for the tool configuration.
    ///
    /// `$JETKIT_CONFIG` wins over `~/.jetkit/config`.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_VAR) {
            return Ok(PathBuf::from(path));
        }
        dirs::home_dir()
            .map(|home| home.join(".jetkit").join("config"))
            .ok_or_else(|| JetkitError::Config("Could not determine home directory".to_string()))
    }
}
