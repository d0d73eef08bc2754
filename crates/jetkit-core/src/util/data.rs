//! JSON data handling utilities.

use jetkit_types::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Read and parse a JSON file.
pub async fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Serialize `value` compactly and replace the file's contents.
pub async fn write_json_file(path: impl AsRef<Path>, value: &Value) -> Result<()> {
    let content = serde_json::to_string(value)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}

/// Deep merge two JSON values.
/// Recursively merges objects, with overlay values taking precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_val) => *base_val = deep_merge(base_val.take(), overlay_val),
                    None => {
                        base_map.insert(key, overlay_val);
                    }
                }
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}
