//! # jetkit Core
//!
//! Core utilities, configuration management, logging, and common functionality
//! for the jetkit scaffolding CLI.
//!
//! This crate provides:
//!
//! - **Configuration**: Layered tool configuration (defaults, file, environment)
//! - **Paths**: Resolution of the project files jetkit reads and writes
//! - **Logging**: `tracing` subscriber setup with optional file output
//! - **Process Execution**: Streaming and captured child processes
//! - **File Operations**: JSON/YAML handling, path utilities
//!
//! ## Example
//!
//! ```no_run
//! use jetkit_core::{config::ToolConfig, paths::ProjectPaths};
//!
//! let config = ToolConfig::load()?;
//! let paths = ProjectPaths::new(".", &config);
//! println!("app config lives at {}", paths.app_config().display());
//! # Ok::<(), jetkit_core::JetkitError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod paths;
pub mod util;

// Re-export commonly used items
pub use config::{Config, ToolConfig};
pub use jetkit_types::{JetkitError, Result};
pub use paths::ProjectPaths;

/// jetkit version, recorded as `generatorVersion` in restored projects
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// jetkit application name
pub const APP_NAME: &str = "jetkit";
