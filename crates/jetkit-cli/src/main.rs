//! jetkit CLI entry point.

use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;
mod context;
mod ui;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = jetkit_core::log::init(cli.log_level(), cli.log_file.as_deref()) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    match cli.execute().await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
