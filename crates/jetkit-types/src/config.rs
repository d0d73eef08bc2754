//! On-disk project configuration records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// Name of the hook run at the end of a restore.
pub const AFTER_APP_RESTORE: &str = "after_app_restore";

/// Application configuration (`oraclejetconfig.json`).
///
/// Only the fields jetkit reads are modelled; the config writer patches the
/// raw JSON so that other fields survive untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Components to add on restore, name to version specifier
    #[serde(default)]
    pub composites: IndexMap<String, String>,

    /// Version of the tool that last restored the project
    #[serde(rename = "generatorVersion", skip_serializing_if = "Option::is_none")]
    pub generator_version: Option<String>,
}

impl AppConfig {
    /// Interpret a parsed config file.
    ///
    /// Anything that is not a JSON object (the bare version string written on
    /// first creation, for instance) carries no composites.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        if value.is_object() {
            serde_json::from_value(value)
        } else {
            Ok(Self::default())
        }
    }

    /// Component specifiers in `name@version` form, in file order.
    pub fn component_specs(&self) -> Vec<String> {
        self.composites
            .iter()
            .map(|(name, version)| format!("{}@{}", name, version))
            .collect()
    }
}

/// Hooks configuration (`scripts/hooks/hooks.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Lifecycle hook name to script path
    #[serde(default)]
    pub hooks: HashMap<String, PathBuf>,
}

impl HooksConfig {
    /// Script configured for a hook, if any.
    pub fn path_for(&self, hook: &str) -> Option<&PathBuf> {
        self.hooks.get(hook)
    }
}
