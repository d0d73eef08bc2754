//! CLI command implementations.

pub mod create;
pub mod generate;
pub mod restore;
pub mod tooling;
pub mod version;
