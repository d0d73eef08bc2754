//! Yeoman generator runtime client.

use async_trait::async_trait;
use jetkit_core::util::process::{command_line, resolve_program, run_captured, run_streaming};
use jetkit_types::{options, GeneratorRuntime, JetkitError, Options, Result};
use std::path::PathBuf;

/// Generous limit for the `--generators` listing.
const LISTING_MAX_BUFFER: usize = 1024 * 1024;

/// Drives the `yo` executable.
#[derive(Debug, Clone)]
pub struct YeomanClient {
    program: String,
    cwd: PathBuf,
}

impl YeomanClient {
    /// Create a client that runs generators in `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }
}

/// Parse `yo --generators` output into `namespace:generator` identifiers.
///
/// Namespaces are indented by two spaces and their sub-generators by four; a
/// namespace without sub-generators is listed on its own.
pub fn parse_generator_listing(listing: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut namespace: Option<(String, bool)> = None;

    for line in listing.lines() {
        let name = line.trim();
        if name.is_empty() || !line.starts_with(' ') {
            continue;
        }

        let indent = line.len() - line.trim_start().len();
        if indent <= 2 {
            if let Some((ns, false)) = namespace.take() {
                found.push(ns);
            }
            namespace = Some((name.to_string(), false));
        } else if let Some((ns, has_subs)) = namespace.as_mut() {
            found.push(format!("{}:{}", ns, name));
            *has_subs = true;
        }
    }

    if let Some((ns, false)) = namespace {
        found.push(ns);
    }
    found
}

#[async_trait]
impl GeneratorRuntime for YeomanClient {
    async fn lookup(&self) -> Result<Vec<String>> {
        let program = resolve_program(&self.program)
            .map_err(|e| JetkitError::Generator(e.to_string()))?;
        let args = vec!["--generators".to_string()];
        let line = command_line(&self.program, &args);

        let output = run_captured(&program, &args, &self.cwd, LISTING_MAX_BUFFER)
            .await?
            .into_result(&line)?;
        Ok(parse_generator_listing(&output.stdout))
    }

    async fn run(&self, command: &str, opts: &Options) -> Result<()> {
        let program = resolve_program(&self.program)
            .map_err(|e| JetkitError::Generator(e.to_string()))?;
        let mut args: Vec<String> = command.split_whitespace().map(str::to_string).collect();
        args.extend(options::to_cli_flags(opts));
        let line = command_line(&self.program, &args);

        tracing::debug!("running `{}`", line);
        run_streaming(&program, &args, &self.cwd, &[])
            .await?
            .into_result(&line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generator_listing() {
        let listing = "Available Generators:\n\n  @oracle/oraclejet\n    app\n    hybrid\n  webapp\n";
        assert_eq!(
            parse_generator_listing(listing),
            vec!["@oracle/oraclejet:app", "@oracle/oraclejet:hybrid", "webapp"]
        );
    }

    #[test]
    fn test_parse_empty_listing() {
        assert!(parse_generator_listing("No generators installed\n").is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_runtime_is_generator_error() {
        let client = YeomanClient::new("jetkit-no-such-yo", ".");
        assert!(matches!(client.lookup().await, Err(JetkitError::Generator(_))));
    }
}
