//! Filesystem utilities.

use std::path::{Path, PathBuf};

/// Expand a leading tilde to the home directory.
pub fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    path.to_path_buf()
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = expand_path(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Anchor a relative `path` at the current working directory.
///
/// Child processes run in other directories, so paths handed to them must not
/// depend on the caller's cwd.
pub fn absolutize(path: impl AsRef<Path>) -> std::io::Result<PathBuf> {
    let path = expand_path(path);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Check whether anything exists at `path`.
pub async fn path_exists(path: impl AsRef<Path>) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}
