//! Error types for jetkit operations.

use thiserror::Error;

/// The main error type for jetkit operations.
///
/// Covers configuration problems, failed child processes, user hooks and the
/// generator/tooling collaborators.
#[derive(Error, Debug)]
pub enum JetkitError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A child process exited unsuccessfully
    #[error("`{command}` failed ({status}): {output}")]
    Process {
        /// Command line that was run
        command: String,
        /// Exit status description (`exit code 1`, `signal`, ...)
        status: String,
        /// Captured stderr, or stdout when stderr was empty
        output: String,
    },

    /// A lifecycle hook ran and failed
    #[error("Hook execution error: {0}")]
    Hook(String),

    /// A configured hook path could not be found
    #[error("Hook not found: {0}")]
    HookNotFound(String),

    /// A hook path exists but cannot be invoked as a hook
    #[error("Hook {path} cannot be loaded: {reason}")]
    HookNotConforming {
        /// Resolved hook path
        path: String,
        /// Why the file was rejected
        reason: String,
    },

    /// Generator lookup or run error
    #[error("Generator error: {0}")]
    Generator(String),

    /// The working directory is not a jetkit project
    #[error("Not a project: {0}")]
    NotAProject(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal bug - should never happen in production
    #[error("Bug detected: {0}\n\nThis is an internal error. Please report this issue.")]
    Bug(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for jetkit operations.
pub type Result<T> = std::result::Result<T, JetkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/oraclejetconfig.json")?)
        }
        assert!(matches!(open_missing(), Err(JetkitError::Io(_))));
    }

    #[test]
    fn test_process_error_message_includes_output() {
        let err = JetkitError::Process {
            command: "cordova prepare".to_string(),
            status: "exit code 1".to_string(),
            output: "ENOENT www/index.html".to_string(),
        };
        assert!(err.to_string().contains("index.html"));
        assert!(err.to_string().starts_with("`cordova prepare` failed"));
    }
}
