//! Log output for the TUI
//!
//! The terminal is in raw mode on the alternate screen while the app runs, so
//! log lines go to a file instead of stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "registration-tui.log";

/// Non-blocking appender for `dir/registration-tui.log`, creating `dir` if needed
pub fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard, PathBuf)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    Ok((writer, guard, dir.join(LOG_FILE_NAME)))
}

/// Install the global subscriber. Keep the guard alive until exit so buffered
/// lines are flushed.
pub fn init(dir: &Path) -> Result<(WorkerGuard, PathBuf)> {
    let (writer, guard, path) = file_writer(dir)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registration_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok((guard, path))
}
