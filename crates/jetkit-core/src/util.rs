//! Common utility functions.

pub mod data;
pub mod fs;
pub mod process;

// Re-export commonly used items
pub use data::{deep_merge, read_json_file};
pub use fs::{expand_path, path_exists};
pub use process::{resolve_program, run_captured, run_streaming, ProcessOutput};
