//! Structured logging infrastructure for Glocal.
//!
//! A thin layer over `tracing-subscriber` that installs a global subscriber
//! from a [`LoggingConfig`], writing to stdout, a file, or both.

mod formatters;
#[cfg(test)]
mod tests;

pub use formatters::DevelopmentFormatter;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Keeps the non-blocking file writer flushing for the life of the process
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// Error parsing log level
    InvalidLogLevel(String),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::InvalidLogLevel(s) => write!(f, "Invalid log level: {}", s),
        }
    }
}

impl std::error::Error for LogError {}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
///
/// Calling this again after a global subscriber is installed is a no-op.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let level = to_tracing_level(config.level);

    let Some(writer) = make_writer(config)? else {
        return Ok(());
    };

    // Escape codes only go to a terminal, never into a log file
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(config.file.is_none())
        .with_writer(writer);

    match config.format {
        LogFormat::Json => builder
            .json()
            .with_target(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .try_init(),
        LogFormat::Compact => builder.compact().with_target(true).try_init(),
        LogFormat::Pretty => builder
            .pretty()
            .with_target(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Default => builder.event_format(DevelopmentFormatter).try_init(),
    }
    .or_else(|e| {
        // Another thread installed a subscriber between the check and now
        if tracing::dispatcher::has_been_set() {
            Ok(())
        } else {
            Err(e.into())
        }
    })
}

/// Build the writer for the configured sinks, or `None` when logging is off.
fn make_writer(config: &LoggingConfig) -> Result<Option<BoxMakeWriter>> {
    match (&config.file, config.stdout) {
        (Some(path), true) => {
            let file = create_non_blocking_file(path)?;
            Ok(Some(BoxMakeWriter::new(file.and(std::io::stdout))))
        }
        (Some(path), false) => {
            let file = create_non_blocking_file(path)?;
            Ok(Some(BoxMakeWriter::new(file)))
        }
        (None, true) => Ok(Some(BoxMakeWriter::new(std::io::stdout))),
        (None, false) => Ok(None),
    }
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(
    path: impl AsRef<Path>,
) -> Result<tracing_appender::non_blocking::NonBlocking> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    // Only the first installed subscriber's guard matters
    let _ = FILE_GUARD.set(guard);

    Ok(non_blocking)
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level
        .parse::<LogLevel>()
        .map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}

/// Convert a tracing::Level to a LogLevel enum.
pub fn level_to_log_level(level: Level) -> LogLevel {
    match level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}
