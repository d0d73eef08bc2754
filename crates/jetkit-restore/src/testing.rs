//! Recording fakes for the restore collaborators.

use async_trait::async_trait;
use jetkit_types::{
    Hook, HookLoader, JetkitError, Options, PackageManager, PlatformToolchain, Result, Tooling,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared, ordered record of collaborator calls.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Package manager that records `install` and optionally fails.
pub struct FakePackageManager {
    pub journal: Journal,
    pub fail_with: Option<String>,
}

#[async_trait]
impl PackageManager for FakePackageManager {
    async fn install(&self, _project_root: &Path) -> Result<()> {
        self.journal.record("install");
        match &self.fail_with {
            Some(output) => Err(JetkitError::Process {
                command: "npm install".to_string(),
                status: "exit code 1".to_string(),
                output: output.clone(),
            }),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "npm"
    }
}

/// Tooling that records every dispatch.
pub struct FakeTooling {
    pub journal: Journal,
}

#[async_trait]
impl Tooling for FakeTooling {
    async fn dispatch(
        &self,
        task: &str,
        scope: &str,
        parameters: &[String],
        _options: &Options,
    ) -> Result<()> {
        self.journal
            .record(format!("{} {} {}", task, scope, parameters.join(",")));
        Ok(())
    }
}

/// Platform toolchain that records `prepare` and optionally fails.
pub struct FakeToolchain {
    pub journal: Journal,
    pub fail_with: Option<String>,
}

#[async_trait]
impl PlatformToolchain for FakeToolchain {
    async fn prepare(&self, _staging_dir: &Path) -> Result<()> {
        self.journal.record("prepare");
        match &self.fail_with {
            Some(output) => Err(JetkitError::Process {
                command: "cordova prepare".to_string(),
                status: "exit code 1".to_string(),
                output: output.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Hook loader whose hooks record their invocation.
pub struct FakeHookLoader {
    pub journal: Journal,
    pub fail_with: Option<String>,
}

struct FakeHook {
    path: PathBuf,
    journal: Journal,
    fail_with: Option<String>,
}

#[async_trait]
impl Hook for FakeHook {
    async fn invoke(&self) -> Result<()> {
        self.journal.record("hook");
        match &self.fail_with {
            Some(message) => Err(JetkitError::Hook(message.clone())),
            None => Ok(()),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl HookLoader for FakeHookLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Hook>> {
        Ok(Box::new(FakeHook {
            path: path.to_path_buf(),
            journal: self.journal.clone(),
            fail_with: self.fail_with.clone(),
        }))
    }
}
