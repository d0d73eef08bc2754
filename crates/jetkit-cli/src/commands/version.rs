//! Show version information.

use anyhow::Result;
use colored::Colorize;
use jetkit_types::Outcome;

pub async fn execute(verbose: bool) -> Result<Outcome> {
    println!("{} {}", jetkit_core::APP_NAME.cyan().bold(), jetkit_core::VERSION);

    if verbose {
        println!("\nBuild Information:");
        println!("  Target: {}", std::env::consts::ARCH);
        println!("  OS: {}", std::env::consts::OS);
        println!("  Rust Version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    Ok(Outcome::Succeeded)
}
