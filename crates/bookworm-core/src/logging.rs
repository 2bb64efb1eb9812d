//! Logging configuration using tracing
//!
//! The TUI owns stdout, so logs go to a rolling file instead.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/bookworm/logs/`.
/// Log level is controlled by the `BOOKWORM_LOG` environment variable.
///
/// # Examples
/// ```bash
/// BOOKWORM_LOG=debug bookworm
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "bookworm.log");

    // Default to info, allow override via BOOKWORM_LOG
    let env_filter = EnvFilter::try_from_env("BOOKWORM_LOG")
        .unwrap_or_else(|_| EnvFilter::new("bookworm=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("bookworm starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("bookworm").join("logs")
}
