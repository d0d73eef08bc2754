//! Hybrid platform preparation step.

use jetkit_core::ProjectPaths;
use jetkit_types::{JetkitError, PlatformToolchain, Result};
use tracing::{debug, info};

/// File whose absence the toolchain reports on freshly restored projects.
const BENIGN_PREPARE_MARKER: &str = "index.html";

/// Whether a failed `prepare` only complained about the missing web entry point.
///
/// The toolchain does not expose a structured code for this case, so its
/// output is inspected. The command line is not: a program path mentioning
/// the marker says nothing about the failure.
pub fn is_benign_prepare_failure(err: &JetkitError) -> bool {
    match err {
        JetkitError::Process { output, .. } => output.contains(BENIGN_PREPARE_MARKER),
        _ => false,
    }
}

/// Create `<staging>/www` and run the toolchain's `prepare` in the staging directory.
pub async fn prepare_platform(paths: &ProjectPaths, toolchain: &dyn PlatformToolchain) -> Result<()> {
    tokio::fs::create_dir_all(paths.hybrid_www()).await?;

    info!("Restoring hybrid platforms and plugins");
    match toolchain.prepare(paths.hybrid_staging()).await {
        Ok(()) => Ok(()),
        Err(e) if is_benign_prepare_failure(&e) => {
            debug!("ignoring prepare failure: {}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeToolchain, Journal};
    use jetkit_core::ToolConfig;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn toolchain(journal: &Journal, fail_with: Option<&str>) -> FakeToolchain {
        FakeToolchain {
            journal: journal.clone(),
            fail_with: fail_with.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_creates_www_and_prepares_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path(), &ToolConfig::default());
        let journal = Journal::default();

        prepare_platform(&paths, &toolchain(&journal, None)).await.unwrap();

        assert!(paths.hybrid_www().is_dir());
        assert_eq!(journal.entries(), vec!["prepare"]);
    }

    #[tokio::test]
    async fn test_missing_index_html_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path(), &ToolConfig::default());
        let journal = Journal::default();
        let fake = toolchain(&journal, Some("ENOENT: no such file, open 'www/index.html'"));

        prepare_platform(&paths, &fake).await.unwrap();
    }

    #[tokio::test]
    async fn test_other_failures_propagate() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path(), &ToolConfig::default());
        let journal = Journal::default();
        let fake = toolchain(&journal, Some("Current working directory is not a Cordova-based project."));

        let err = prepare_platform(&paths, &fake).await.unwrap_err();
        assert!(err.to_string().contains("not a Cordova-based project"));
    }

    fn prepare_failure(command: &str, output: &str) -> JetkitError {
        JetkitError::Process {
            command: command.to_string(),
            status: "exit code 1".to_string(),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_near_misses_are_fatal() {
        for output in [
            "ENOENT: no such file, open 'www/index.htm'",
            "missing www/index-html",
            "missing www/INDEX.HTML",
            "index html not found",
            "",
        ] {
            assert!(
                !is_benign_prepare_failure(&prepare_failure("cordova prepare", output)),
                "{:?} should be fatal",
                output
            );
        }
    }

    #[test]
    fn test_marker_outside_output_is_fatal() {
        let err = prepare_failure(
            "/opt/index.html/bin/cordova prepare",
            "Current working directory is not a Cordova-based project.",
        );
        assert!(err.to_string().contains("index.html"));
        assert!(!is_benign_prepare_failure(&err));

        assert!(!is_benign_prepare_failure(&JetkitError::Other(
            "www/index.html".to_string()
        )));
    }

    #[tokio::test]
    async fn test_program_path_with_marker_still_fails() {
        struct MisnamedToolchain;

        #[async_trait::async_trait]
        impl PlatformToolchain for MisnamedToolchain {
            async fn prepare(&self, _staging_dir: &std::path::Path) -> Result<()> {
                Err(prepare_failure("/opt/index.html/bin/cordova prepare", "plugin fetch failed"))
            }
        }

        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path(), &ToolConfig::default());

        assert!(prepare_platform(&paths, &MisnamedToolchain).await.is_err());
    }

    proptest! {
        #[test]
        fn outputs_naming_index_html_are_benign(prefix in ".*", suffix in ".*") {
            let output = format!("{}index.html{}", prefix, suffix);
            prop_assert!(is_benign_prepare_failure(&prepare_failure("cordova prepare", &output)));
        }

        #[test]
        fn outputs_without_index_html_are_fatal(
            output in ".*".prop_filter("marker", |o| !o.contains("index.html"))
        ) {
            prop_assert!(!is_benign_prepare_failure(&prepare_failure("cordova prepare", &output)));
        }
    }
}
