//! Logging setup
//!
//! Every event goes to the console and to `searchtabs.log` in the data dir.
//! `RUST_LOG` overrides the default `info` filter.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::Result;

pub const LOG_FILE_NAME: &str = "searchtabs.log";

/// Keeps the background file writer alive. Dropping it flushes buffered lines.
#[must_use = "file logging stops when the guard is dropped"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Initialize logging
pub fn init_logging(log_dir: &Path) -> Result<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (file_writer, worker) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .try_init()?;

    tracing::info!(path = %log_dir.join(LOG_FILE_NAME).display(), "Logging initialized");

    Ok(LogGuard { _worker: worker })
}
