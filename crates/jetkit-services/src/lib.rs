//! # jetkit Services
//!
//! Child-process clients for the external tools jetkit drives.
//!
//! This crate provides async clients for:
//! - **Package manager**: `npm install` (or any compatible manager)
//! - **Cordova**: the hybrid platform `prepare` step
//! - **Tooling**: the build tooling dispatcher (`add`, `build`, `serve`, ...)
//! - **Yeoman**: generator lookup and runs

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cordova;
pub mod npm;
pub mod tooling;
pub mod yeoman;

pub use cordova::CordovaClient;
pub use npm::NpmClient;
pub use tooling::ToolingClient;
pub use yeoman::YeomanClient;
