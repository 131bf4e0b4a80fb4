//! File logging. The terminal belongs to the UI, so nothing is written to
//! stdout or stderr while the game runs.

use std::fs;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::constants::{LOG_DIR, LOG_FILE};
use crate::errors::Result;
use crate::utils::persistence;

/// Route `tracing` output to ~/.cluedo/logs/cluedo.log.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn init_logging() -> Result<WorkerGuard> {
    let log_dir = persistence::cluedo_dir()?.join(LOG_DIR);
    fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    info!(
        log_file = %log_dir.join(LOG_FILE).display(),
        "logging initialized"
    );
    Ok(guard)
}
