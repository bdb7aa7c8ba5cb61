//! Log file setup
//!
//! Logs go to a file rather than stdout, since stdout carries the rendered
//! catalog. The level is read from `WICKET_VERSIONS_LOG` (e.g. `debug`,
//! `wicket_versions=trace`) and defaults to `info`.

use std::ffi::OsStr;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "WICKET_VERSIONS_LOG";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Output format of log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install the global subscriber writing to `log_path`
///
/// The returned guard flushes buffered records when dropped and must be kept
/// alive for the lifetime of the program.
pub fn init_logging(log_path: &Path, format: LogFormat) -> Result<WorkerGuard, LoggingError> {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_name = log_path
        .file_name()
        .unwrap_or(OsStr::new("wicket-versions.log"));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var(LOG_ENV).ok().as_deref()))
        .with_writer(writer)
        .with_ansi(false);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(guard)
}

/// Parse filter directives, falling back to the default level when absent or invalid
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
