//! Build tooling client.

use async_trait::async_trait;
use jetkit_core::util::process::{command_line, resolve_program, run_streaming};
use jetkit_types::{options, Options, Result, Tooling};
use std::path::PathBuf;

/// Runs `<program> <task> <scope> [parameters...] [--flags...]` in a project.
#[derive(Debug, Clone)]
pub struct ToolingClient {
    program: String,
    project_root: PathBuf,
}

impl ToolingClient {
    /// Create a client working in `project_root`.
    pub fn new(program: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            project_root: project_root.into(),
        }
    }

    /// Argument vector for a dispatch.
    pub fn args(task: &str, scope: &str, parameters: &[String], opts: &Options) -> Vec<String> {
        let mut args = vec![task.to_string(), scope.to_string()];
        args.extend(parameters.iter().cloned());
        args.extend(options::to_cli_flags(opts));
        args
    }
}

#[async_trait]
impl Tooling for ToolingClient {
    async fn dispatch(
        &self,
        task: &str,
        scope: &str,
        parameters: &[String],
        options: &Options,
    ) -> Result<()> {
        let program = resolve_program(&self.program)?;
        let args = Self::args(task, scope, parameters, options);
        let line = command_line(&self.program, &args);

        tracing::debug!("running `{}`", line);
        run_streaming(&program, &args, &self.project_root, &[])
            .await?
            .into_result(&line)?;
        Ok(())
    }
}
