//! # jetkit Generator
//!
//! Forwards scaffolding requests to the generator runtime and build requests
//! to the tooling:
//!
//! - `GeneratorEnv`: per-invocation generator context with its error channel
//! - `Dispatcher`: `create`, `delegate_to_generator` and `run_tooling`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatch;
pub mod env;

pub use dispatch::Dispatcher;
pub use env::{ErrorSink, GeneratorEnv};
