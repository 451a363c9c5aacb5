use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "geo-atlas.log";

/// `<data dir>/geo-atlas/logs`, or the temp dir when the platform has no data dir.
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("geo-atlas")
        .join("logs")
}

/// Sends tracing events and `log` records to a daily log file.
///
/// stdout belongs to the terminal UI, so nothing is written there. The filter comes
/// from `RUST_LOG` with `info` as the default level.
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init()
        .context("Failed to install the log subscriber")?;

    tracing::info!("Logging to {}", dir.display());
    Ok(guard)
}
