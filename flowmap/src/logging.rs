//! Tracing subscriber setup.
//!
//! Every run truncates and writes the configured log file. Console output, when
//! enabled, goes to stderr because stdout carries rendered documents. `RUST_LOG`
//! overrides the level chosen here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer alive; buffered lines are flushed on drop.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Installs the global subscriber writing to `log_path`.
///
/// With `stderr` set, lines are also echoed to the terminal. `debug` lowers the
/// default level from `info` to `debug` when `RUST_LOG` is unset.
///
/// Fails if the log directory cannot be created or the file cannot be
/// truncated.
pub fn init_logging(log_path: &Path, stderr: bool, debug: bool) -> Result<LoggingGuard, io::Error> {
    let (log_dir, log_file) = prepare_log_file(log_path)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    let stderr_layer = stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .with_target(false)
            .compact()
    });

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Filter directive used when RUST_LOG is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Create the parent directory and truncate the log file.
///
/// Returns the directory and file name halves of `log_path`.
fn prepare_log_file(log_path: &Path) -> Result<(PathBuf, String), io::Error> {
    let log_dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let log_file = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("log path '{}' has no file name", log_path.display()),
            )
        })?;

    fs::create_dir_all(&log_dir)?;
    fs::write(log_dir.join(&log_file), "")?;

    Ok((log_dir, log_file))
}
