//! Package manager client.

use async_trait::async_trait;
use jetkit_core::util::process::{command_line, resolve_program, run_streaming};
use jetkit_types::{PackageManager, Result};
use std::path::Path;

/// Runs `<program> install` for a project.
#[derive(Debug, Clone)]
pub struct NpmClient {
    program: String,
}

impl NpmClient {
    /// Create a client for `program` (`npm`, `yarn`, `pnpm`, or a path).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NpmClient {
    fn default() -> Self {
        Self::new("npm")
    }
}

#[async_trait]
impl PackageManager for NpmClient {
    async fn install(&self, project_root: &Path) -> Result<()> {
        let program = resolve_program(&self.program)?;
        let args = vec!["install".to_string()];
        let line = command_line(&self.program, &args);

        tracing::debug!("running `{}` in {}", line, project_root.display());
        run_streaming(&program, &args, project_root, &[])
            .await?
            .into_result(&line)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use jetkit_types::JetkitError;

    #[tokio::test]
    async fn test_install_exit_status() {
        let root = tempfile::TempDir::new().unwrap();

        NpmClient::new("true").install(root.path()).await.unwrap();

        let err = NpmClient::new("false").install(root.path()).await.unwrap_err();
        match err {
            JetkitError::Process { command, status, .. } => {
                assert_eq!(command, "false install");
                assert_eq!(status, "exit code 1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_package_manager() {
        let root = tempfile::TempDir::new().unwrap();
        let client = NpmClient::new("jetkit-no-such-package-manager");
        assert_eq!(client.name(), "jetkit-no-such-package-manager");
        assert!(matches!(
            client.install(root.path()).await,
            Err(JetkitError::Config(_))
        ));
    }
}
