//! # jetkit Restore
//!
//! Restores a web or hybrid project after checkout:
//! - Dependency installation through the package manager
//! - Application config creation/versioning
//! - Re-adding configured components through the tooling
//! - Hybrid platform preparation
//! - The `after_app_restore` lifecycle hook
//!
//! `Restore::run` drives these steps in order and reports an `Outcome`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app_config;
pub mod components;
pub mod hook;
pub mod installer;
pub mod orchestrator;
pub mod platform;

#[cfg(test)]
mod testing;

pub use hook::{ScriptHook, ScriptHookLoader};
pub use orchestrator::{Restore, RestoreBuilder};
pub use platform::is_benign_prepare_failure;
