use std::{fs, io, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "turdle.log";

/// Installs the global subscriber.
///
/// With a directory, logs go to `turdle.log` inside it at `info` unless
/// `RUST_LOG` says otherwise. Without one, only warnings reach stderr.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(log_dir: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir else {
        tracing_subscriber::fmt()
            .with_env_filter(filter("warn"))
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    };

    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
