//! Logging Infrastructure
//!
//! `tracing-subscriber` fmt output, filtered by `RUST_LOG` when set and by
//! the configured level otherwise, with optional daily rolling files and
//! optional JSON lines.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// Files go to `<log_dir>/quote-engine.<date>` when the directory exists;
/// otherwise output goes to stderr. Calling this twice is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json = json.unwrap_or(false);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir.and_then(file_appender);

    // json() changes the builder type, so each branch initializes on its own
    let _ = match (json, file_appender) {
        (true, Some(appender)) => subscriber
            .json()
            .with_ansi(false)
            .with_writer(appender)
            .try_init(),
        (true, None) => subscriber.json().with_writer(std::io::stderr).try_init(),
        (false, Some(appender)) => subscriber.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => subscriber.with_writer(std::io::stderr).try_init(),
    };
}

fn file_appender(dir: &str) -> Option<RollingFileAppender> {
    let log_path = Path::new(dir);
    log_path
        .is_dir()
        .then(|| tracing_appender::rolling::daily(log_path, "quote-engine"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_logger_with_file(Some("debug"), Some(true), Some("/nonexistent/log/dir"));
        init_logger();
        tracing::info!("logger initialised twice");
    }

    #[test]
    fn test_file_appender_needs_existing_dir() {
        assert!(file_appender("/nonexistent/log/dir").is_none());

        let dir = tempfile::tempdir().unwrap();
        assert!(file_appender(dir.path().to_str().unwrap()).is_some());
    }
}
