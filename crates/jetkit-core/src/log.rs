//! Logging system for jetkit.
//!
//! Installs a `tracing` subscriber writing to the terminal and, optionally,
//! to a log file.

use jetkit_types::{JetkitError, LogLevel, Result};
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(level: LogLevel) -> String {
    format!("jetkit={lvl},jetkit_restore={lvl},jetkit_generator={lvl},jetkit_services={lvl},jetkit_core={lvl}", lvl = level.as_filter())
}

/// Initialize logging at `level`, mirroring events to `log_file` when given.
///
/// `RUST_LOG` overrides `level` for the terminal output.
pub fn init(level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let terminal = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let file = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| JetkitError::Config(format!("Invalid log file path: {}", path.display())))?;
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, name);
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(appender)
                    .with_filter(EnvFilter::new(default_filter(LogLevel::Debug))),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(terminal)
        .with(file)
        .try_init()
        .map_err(|e| JetkitError::Other(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_crates() {
        let filter = default_filter(LogLevel::Warn);
        assert!(filter.starts_with("jetkit=warn"));
        assert!(filter.contains("jetkit_restore=warn"));
    }
}
