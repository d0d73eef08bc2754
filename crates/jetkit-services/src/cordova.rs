//! Cordova platform toolchain client.

use async_trait::async_trait;
use jetkit_core::util::process::{command_line, resolve_program, run_captured};
use jetkit_types::{PlatformToolchain, Result};
use std::path::Path;

/// Runs `<program> prepare` inside a hybrid staging directory.
#[derive(Debug, Clone)]
pub struct CordovaClient {
    program: String,
    max_buffer: usize,
}

impl CordovaClient {
    /// Create a client; output beyond `max_buffer` bytes per stream fails the run.
    pub fn new(program: impl Into<String>, max_buffer: usize) -> Self {
        Self {
            program: program.into(),
            max_buffer,
        }
    }
}

#[async_trait]
impl PlatformToolchain for CordovaClient {
    async fn prepare(&self, staging_dir: &Path) -> Result<()> {
        let program = resolve_program(&self.program)?;
        let args = vec!["prepare".to_string()];
        let line = command_line(&self.program, &args);

        tracing::debug!("running `{}` in {}", line, staging_dir.display());
        let output = run_captured(&program, &args, staging_dir, self.max_buffer)
            .await?
            .into_result(&line)?;

        if !output.stdout.trim().is_empty() {
            tracing::debug!("{}", output.stdout.trim_end());
        }
        Ok(())
    }
}
