//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty, stdout) and production
//! (JSON lines). `RUST_LOG` overrides the configured level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Log file prefix inside `LOG_DIR`
const LOG_FILE_PREFIX: &str = "catalog-server";

/// Initialize the logger from configuration
pub fn init_logger(config: &Config) {
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    );
}

/// Initialize the logger with optional daily-rolling file output
///
/// The file writer is only used when `log_dir` exists; otherwise logs go to
/// stdout.
pub fn init_logger_with_file(log_level: &str, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "catalog_server={log_level},shared={log_level},tower_http={log_level}"
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_dir = log_dir.filter(|dir| Path::new(dir).is_dir());

    match (file_dir, json) {
        (Some(dir), true) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            builder.json().with_writer(appender).init();
        }
        (Some(dir), false) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            builder.with_ansi(false).with_writer(appender).init();
        }
        (None, true) => builder.json().init(),
        (None, false) => builder.init(),
    }
}
