//! Lifecycle hook loading and execution.

use async_trait::async_trait;
use jetkit_core::util::data::read_json_file;
use jetkit_core::util::fs::{absolutize, path_exists};
use jetkit_core::util::process::{command_line, resolve_program, run_streaming};
use jetkit_core::ProjectPaths;
use jetkit_types::config::AFTER_APP_RESTORE;
use jetkit_types::{Hook, HookLoader, HooksConfig, JetkitError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A hook script run as a child process.
#[derive(Debug, Clone)]
pub struct ScriptHook {
    path: PathBuf,
    interpreter: Option<String>,
    cwd: PathBuf,
}

impl ScriptHook {
    /// Program and arguments the hook is launched with.
    fn invocation(&self) -> (String, Vec<String>) {
        let script = self.path.to_string_lossy().to_string();
        match &self.interpreter {
            Some(interpreter) => (interpreter.clone(), vec![script]),
            None => (script, Vec::new()),
        }
    }
}

#[async_trait]
impl Hook for ScriptHook {
    async fn invoke(&self) -> Result<()> {
        let (program, args) = self.invocation();
        let line = command_line(&program, &args);
        let resolved = resolve_program(&program)
            .map_err(|e| JetkitError::Hook(e.to_string()))?;

        let env_vars = [
            (
                "JETKIT_PROJECT_ROOT".to_string(),
                self.cwd.to_string_lossy().to_string(),
            ),
            (
                "JETKIT_HOOK_PATH".to_string(),
                self.path.to_string_lossy().to_string(),
            ),
        ];

        let output = run_streaming(&resolved, &args, &self.cwd, &env_vars)
            .await
            .map_err(|e| JetkitError::Hook(format!("Failed to execute {}: {}", line, e)))?;
        output
            .into_result(&line)
            .map_err(|e| JetkitError::Hook(e.to_string()))?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads hook scripts, picking the interpreter from the file extension.
///
/// `.js`/`.cjs`/`.mjs` run with `node`, `.sh`/`.bash` with `bash`; any other
/// file must be executable.
///
/// Hooks run in the project root and see `JETKIT_PROJECT_ROOT` and
/// `JETKIT_HOOK_PATH`, both absolute.
pub struct ScriptHookLoader {
    project_root: PathBuf,
}

impl ScriptHookLoader {
    /// Create a loader whose hooks run in `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }
}

fn interpreter_for(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "js" | "cjs" | "mjs" => Some("node"),
        "sh" | "bash" => Some("bash"),
        _ => None,
    }
}

#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    true
}

impl HookLoader for ScriptHookLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn Hook>> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| JetkitError::HookNotFound(path.display().to_string()))?;

        let not_conforming = |reason: &str| JetkitError::HookNotConforming {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        if !metadata.is_file() {
            return Err(not_conforming("not a regular file"));
        }

        let interpreter = interpreter_for(path);
        if interpreter.is_none() && !is_executable(&metadata) {
            return Err(not_conforming(
                "expected a .js or .sh script, or an executable file",
            ));
        }

        // The child runs in the project root, not in our cwd
        Ok(Box::new(ScriptHook {
            path: absolutize(path)?,
            interpreter: interpreter.map(str::to_string),
            cwd: absolutize(&self.project_root)?,
        }))
    }
}

/// Read the hooks config; a missing file means no hooks.
pub async fn read_hooks_config(path: &Path) -> Result<HooksConfig> {
    if path_exists(path).await {
        read_json_file(path).await
    } else {
        Ok(HooksConfig::default())
    }
}

/// Run the `after_app_restore` hook if one is configured and present.
///
/// An unconfigured or missing hook is logged and skipped; a hook that runs
/// and fails fails the step.
pub async fn run_after_app_restore(paths: &ProjectPaths, loader: &dyn HookLoader) -> Result<()> {
    let hooks = read_hooks_config(paths.hooks_config()).await?;

    let Some(configured) = hooks.path_for(AFTER_APP_RESTORE) else {
        warn!("Hook '{}' not defined", AFTER_APP_RESTORE);
        return Ok(());
    };

    let script = paths.resolve(configured);
    if !path_exists(&script).await {
        warn!(
            "Hook '{}' points to {}, which does not exist",
            AFTER_APP_RESTORE,
            script.display()
        );
        return Ok(());
    }

    let hook = loader.load(&script)?;
    info!("Running hook '{}' ({})", AFTER_APP_RESTORE, hook.path().display());
    hook.invoke().await
}
