//! Tracing setup for the `relay-todo` binary.
//!
//! Stderr gets compact human-readable lines; an optional log file gets one
//! JSON object per event, rotated daily.

use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "relay-todo.log";

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("relay_todo={}", level)
}

/// Splits a log file path into the directory and file-name prefix expected
/// by the rolling appender.
fn appender_parts(log_path: &Path) -> (PathBuf, PathBuf) {
    let dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = log_path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    (dir, file)
}

/// Installs the global subscriber. Calling it twice leaves the first one in place.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let result = match log_file {
        Some(log_path) => {
            let (dir, file) = appender_parts(&log_path);
            let _ = std::fs::create_dir_all(&dir);
            let file_layer = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, file))
                .with_ansi(false)
                .json();
            subscriber.with(file_layer).try_init()
        }
        None => subscriber.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}
