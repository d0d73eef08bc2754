//! # jetkit Types
//!
//! Core types, traits, and enums shared across all jetkit crates.
//!
//! This crate provides the fundamental building blocks for the jetkit
//! scaffolding CLI, including:
//!
//! - The restore flavour (`RestoreType`) and the `Outcome` of a command
//! - The on-disk application and hooks configuration records
//! - Generator/tooling option maps
//! - Traits for the external collaborators (package manager, platform
//!   toolchain, tooling, generator runtime, hooks)
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use jetkit_types::{options, RestoreType};
//!
//! let mut opts = options::from_value(serde_json::json!({"hybrid": true, "foo": 1}));
//! assert!(options::take_flag(&mut opts, "hybrid"));
//! assert_eq!(opts.len(), 1);
//! assert_eq!(RestoreType::Hybrid.to_string(), "hybrid");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod enums;
pub mod errors;
pub mod options;
pub mod traits;

// Re-export common types for convenience
pub use config::{AppConfig, HooksConfig};
pub use enums::{LogLevel, Outcome, RestoreType};
pub use errors::{JetkitError, Result};
pub use options::Options;
pub use traits::{GeneratorRuntime, Hook, HookLoader, PackageManager, PlatformToolchain, Tooling};
