//! Tracing subscriber setup.

use crate::AppConfig;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file.
///
/// The TUI owns the terminal, so nothing may be written to stdout or
/// stderr while it runs. `RUST_LOG` takes precedence over the configured
/// filter.
pub fn init_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "File tracing initialized");
    Ok(())
}

/// Sends tracing output to stderr, warnings only unless `RUST_LOG` says
/// otherwise. Used by headless commands whose stdout is data.
pub fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
