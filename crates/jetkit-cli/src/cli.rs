//! CLI structure and command definitions.

use crate::commands::{create, generate, restore, tooling, version};
use crate::context::AppContext;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use jetkit_types::{LogLevel, Options, Outcome};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jetkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scaffold, restore and build web and hybrid applications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Restore dependencies and generated scaffolding of a checked-out project
    Restore,

    /// Scaffold a new application
    Create {
        /// Application name/directory
        name: Option<String>,

        /// Create a hybrid (mobile) application
        #[arg(long, conflicts_with = "web")]
        hybrid: bool,

        /// Create a web application (the default)
        #[arg(long)]
        web: bool,

        /// Generator option as key=value (repeatable)
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
        options: Vec<(String, Value)>,
    },

    /// Run another generator of the namespace
    Generate {
        /// Generator name (e.g. add-hybrid)
        generator: String,

        /// Positional parameter passed to the generator
        parameter: Option<String>,

        /// Generator option as key=value (repeatable)
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
        options: Vec<(String, Value)>,
    },

    /// Run a build tooling task (build, serve, add, ...)
    Tooling {
        /// Task name
        task: String,

        /// Task scope (app, component, ...)
        scope: String,

        /// Positional parameters, platform included
        parameters: Vec<String>,

        /// Tooling option as key=value (repeatable)
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
        options: Vec<(String, Value)>,
    },

    /// Show version information (build details with --verbose)
    Version,
}

/// Parse `key=value`; the value is JSON when it parses as such, a string otherwise.
///
/// A bare `key` means `key=true`.
pub fn parse_option(raw: &str) -> Result<(String, Value)> {
    let (key, value) = match raw.split_once('=') {
        Some((key, value)) => (key.trim(), value),
        None => (raw.trim(), "true"),
    };
    if key.is_empty() {
        bail!("option '{}' has no key", raw);
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn to_options(pairs: &[(String, Value)]) -> Options {
    pairs.iter().cloned().collect()
}

impl Cli {
    /// Log level selected by the global flags.
    pub fn log_level(&self) -> LogLevel {
        if self.quiet {
            LogLevel::Error
        } else if self.debug {
            LogLevel::Trace
        } else if self.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }

    fn context(&self) -> Result<AppContext> {
        AppContext::load(self.project_root.as_deref(), !self.quiet)
    }

    pub async fn execute(&self) -> Result<Outcome> {
        match &self.command {
            Commands::Restore => restore::execute(&self.context()?).await,
            Commands::Create {
                name,
                hybrid,
                web,
                options,
            } => {
                let ctx = self.context()?;
                create::execute(&ctx, name.as_deref(), *hybrid, *web, to_options(options)).await
            }
            Commands::Generate {
                generator,
                parameter,
                options,
            } => {
                let ctx = self.context()?;
                generate::execute(&ctx, generator, parameter.as_deref(), to_options(options)).await
            }
            Commands::Tooling {
                task,
                scope,
                parameters,
                options,
            } => {
                let ctx = self.context()?;
                tooling::execute(&ctx, task, scope, parameters, to_options(options)).await
            }
            Commands::Version => version::execute(self.verbose).await,
        }
    }
}
