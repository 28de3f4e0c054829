use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{level_to_log_level, parse_log_level};
use std::sync::Once;

// Use this to ensure init is only called once across all tests
static INIT: Once = Once::new();

#[test]
fn test_init_console_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        };

        assert!(crate::logging::init(&config).is_ok());
    });
}

#[test]
fn test_init_twice_is_ok() {
    let config = LoggingConfig {
        level: LogLevel::Warn,
        format: LogFormat::Compact,
        file: None,
        stdout: true,
    };
    assert!(crate::logging::init(&config).is_ok());
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_init_disabled_logging() {
    let config = LoggingConfig {
        stdout: false,
        file: None,
        ..Default::default()
    };
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_level_conversion() {
    assert_eq!(parse_log_level("trace").unwrap(), LogLevel::Trace);
    assert_eq!(parse_log_level("DEBUG").unwrap(), LogLevel::Debug);
    assert!(parse_log_level("info").is_ok());
    assert!(parse_log_level("warn").is_ok());
    assert!(parse_log_level("error").is_ok());
    assert!(parse_log_level("invalid").is_err());

    assert_eq!(level_to_log_level(tracing::Level::TRACE), LogLevel::Trace);
    assert_eq!(level_to_log_level(tracing::Level::DEBUG), LogLevel::Debug);
    assert_eq!(level_to_log_level(tracing::Level::INFO), LogLevel::Info);
    assert_eq!(level_to_log_level(tracing::Level::WARN), LogLevel::Warn);
    assert_eq!(level_to_log_level(tracing::Level::ERROR), LogLevel::Error);
}

#[derive(Clone, Default)]
struct CapturedOutput(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn render_with_development_formatter(ansi: bool) -> String {
    let output = CapturedOutput::default();
    let sink = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(ansi)
        .with_writer(move || sink.clone())
        .event_format(crate::logging::DevelopmentFormatter)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("ranked 3 items");
    });

    let bytes = output.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_development_formatter_plain_without_ansi() {
    let line = render_with_development_formatter(false);
    assert!(line.contains("WARN"));
    assert!(line.contains("ranked 3 items"));
    assert!(!line.contains('\x1b'));
}

#[test]
fn test_development_formatter_colors_with_ansi() {
    let line = render_with_development_formatter(true);
    assert!(line.contains("\x1b[33mWARN"));
}
