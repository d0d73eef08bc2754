//! Reading and versioning the application config file.

use jetkit_core::util::data::{read_json_file, write_json_file};
use jetkit_core::util::fs::path_exists;
use jetkit_types::{AppConfig, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Key carrying the version of the tool that last restored the project.
pub const GENERATOR_VERSION_KEY: &str = "generatorVersion";

/// Load the app config.
pub async fn read_app_config(path: &Path) -> Result<AppConfig> {
    let value: Value = read_json_file(path).await?;
    Ok(AppConfig::from_value(value)?)
}

/// Make sure the app config exists and records `version`.
///
/// A missing file is created holding only the JSON string `version`, not an
/// object. An existing object gets `generatorVersion` set and is rewritten
/// with every other field in place. Existing content that is not an object
/// is written back as it was.
pub async fn write_app_config(path: &Path, version: &str) -> Result<()> {
    if !path_exists(path).await {
        info!("{} file not found, creating it", display_name(path));
        return write_json_file(path, &Value::String(version.to_string())).await;
    }

    let mut value: Value = read_json_file(path).await?;
    match value.as_object_mut() {
        Some(config) => {
            config.insert(
                GENERATOR_VERSION_KEY.to_string(),
                Value::String(version.to_string()),
            );
        }
        None => warn!(
            "{} is not a JSON object, {} was not recorded",
            display_name(path),
            GENERATOR_VERSION_KEY
        ),
    }

    write_json_file(path, &value).await
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
