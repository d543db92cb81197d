//! Logging initialization for optic-desk.
//!
//! TUI mode: logs to `<state>/logs/optic-desk-{datetime}.log`
//! CLI mode: logs to stderr

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

pub struct LoggingHandle {
    /// Flushes the file writer on drop
    pub _guard: Option<WorkerGuard>,
    /// Set only when logging to a file
    pub log_file_path: Option<PathBuf>,
}

/// Log file name for a session started at `timestamp`
pub fn log_file_name(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    format!("optic-desk-{}.log", timestamp.format("%Y%m%dT%H%M%SZ"))
}

/// Resolve the filter directive: `--debug` wins, then `RUST_LOG`, then config.
pub fn filter_directive(config: &Config, debug_override: bool, rust_log: Option<&str>) -> String {
    if debug_override {
        return "debug".to_string();
    }
    rust_log
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| config.logging.level.clone())
}

/// Install the global subscriber.
///
/// The wizard screen owns the terminal, so in TUI mode (with `logging.to_file`)
/// events go to a fresh file under [`Config::logs_path`]. Everything else logs
/// to stderr. Keep the returned handle alive until exit so buffered lines are
/// flushed.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(config, debug_override, rust_log.as_deref());
    let filter = tracing_subscriber::EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    let (writer, guard, log_file_path) = if is_tui_mode && config.logging.to_file {
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;

        let file_name = log_file_name(chrono::Utc::now());
        let appender = tracing_appender::rolling::never(&logs_dir, &file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        (
            BoxMakeWriter::new(non_blocking),
            Some(guard),
            Some(logs_dir.join(file_name)),
        )
    } else {
        (BoxMakeWriter::new(std::io::stderr), None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                // no colour codes in log files
                .with_ansi(log_file_path.is_none())
                .with_writer(writer),
        )
        .init();

    Ok(LoggingHandle {
        _guard: guard,
        log_file_path,
    })
}
