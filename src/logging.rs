//! Tracing setup for the viquill binary.
//!
//! The terminal is in raw mode while the editor runs, so all diagnostics go to
//! a log file. Filtering honours `RUST_LOG` and falls back to the configured
//! level:
//!
//! - `RUST_LOG=debug` - mode changes and fired hotkeys
//! - `RUST_LOG=viquill::input=trace` - also abandoned key sequences

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs a file-backed subscriber writing to `path`.
///
/// The returned guard flushes buffered lines when dropped, so keep it alive
/// for the lifetime of the program.
pub fn init(path: &Path, default_level: &str) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("Invalid log level: {}", default_level))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
