//! Core trait definitions for the external collaborators jetkit drives.

use crate::errors::Result;
use crate::options::Options;
use async_trait::async_trait;
use std::path::Path;

/// Host package manager (npm, yarn, ...).
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Install the project's dependencies, with `project_root` as working directory.
    ///
    /// Fails with `JetkitError::Process` when the manager exits non-zero.
    async fn install(&self, project_root: &Path) -> Result<()>;

    /// Program name, for log messages.
    fn name(&self) -> &str;
}

/// Mobile platform toolchain (cordova).
#[async_trait]
pub trait PlatformToolchain: Send + Sync {
    /// Run the toolchain's `prepare` command inside the staging directory.
    async fn prepare(&self, staging_dir: &Path) -> Result<()>;
}

/// Build tooling dispatcher (`add`, `build`, `serve`, ...).
#[async_trait]
pub trait Tooling: Send + Sync {
    /// Run `task` for `scope` with positional parameters and options.
    async fn dispatch(
        &self,
        task: &str,
        scope: &str,
        parameters: &[String],
        options: &Options,
    ) -> Result<()>;
}

/// Generator runtime (Yeoman environment).
///
/// Implementers discover installed generators and run them by command string.
#[async_trait]
pub trait GeneratorRuntime: Send + Sync {
    /// Discover the installed generators.
    ///
    /// Returns fully qualified identifiers (`namespace:generator`).
    async fn lookup(&self) -> Result<Vec<String>>;

    /// Run a generator.
    ///
    /// `command` is the identifier optionally followed by a space and the
    /// positional parameter.
    async fn run(&self, command: &str, options: &Options) -> Result<()>;
}

/// A loaded lifecycle hook: zero arguments, completes or fails.
#[async_trait]
pub trait Hook: Send + Sync {
    /// Invoke the hook and wait for it to finish.
    async fn invoke(&self) -> Result<()>;

    /// Path the hook was loaded from.
    fn path(&self) -> &Path;
}

/// Resolves a hook path into a callable hook.
pub trait HookLoader: Send + Sync {
    /// Load the hook at `path`.
    ///
    /// Fails with `HookNotFound` when nothing exists there and with
    /// `HookNotConforming` when the file cannot be run as a hook.
    fn load(&self, path: &Path) -> Result<Box<dyn Hook>>;
}
