//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "OUTING_LOG";

const LOG_FILE_NAME: &str = "outing.log";
const DEFAULT_FILTER: &str = "outing=info,outing_core=info,outing_app=info,outing_tui=info,warn";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily rolling file in the given directory. Required while the TUI owns
    /// the terminal.
    File(PathBuf),
    /// Standard error, for headless runs
    Stderr,
}

impl Default for LogTarget {
    fn default() -> Self {
        LogTarget::File(log_directory())
    }
}

/// Initialize the logging subsystem with the default file target
///
/// Logs are written to `~/.local/share/outing-guide/logs/`. Log level is
/// controlled by the `OUTING_LOG` environment variable.
///
/// # Examples
/// ```bash
/// OUTING_LOG=debug outing
/// OUTING_LOG=outing_app=trace outing
/// ```
pub fn init() -> Result<()> {
    init_with(LogTarget::default())
}

/// Initialize the logging subsystem writing to `target`
pub fn init_with(target: LogTarget) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let timer = fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    match &target {
        LogTarget::File(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_timer(timer),
                )
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_timer(timer),
                )
                .init();
        }
    }

    tracing::info!("Outing Guide {} starting", env!("CARGO_PKG_VERSION"));
    if let LogTarget::File(dir) = &target {
        tracing::info!("Log directory: {}", dir.display());
    }

    Ok(())
}

/// Default log directory under the platform's local data dir
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("outing-guide").join("logs")
}
