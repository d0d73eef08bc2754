//! Progress indicators and spinners.

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use jetkit_types::{GeneratorRuntime, Options, Result};
use std::sync::Arc;
use std::time::Duration;

/// Create a spinner for long-running operations.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Shows a spinner while generators are looked up.
///
/// Runs are passed through untouched: generators prompt on the terminal.
pub struct LookupSpinner {
    inner: Arc<dyn GeneratorRuntime>,
}

impl LookupSpinner {
    pub fn new(inner: Arc<dyn GeneratorRuntime>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl GeneratorRuntime for LookupSpinner {
    async fn lookup(&self) -> Result<Vec<String>> {
        let pb = spinner("Looking up generators...");
        let found = self.inner.lookup().await;
        pb.finish_and_clear();
        found
    }

    async fn run(&self, command: &str, options: &Options) -> Result<()> {
        self.inner.run(command, options).await
    }
}
