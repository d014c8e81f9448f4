//! Tracing setup: stdout plus one log file per run.

use std::path::Path;

use anyhow::Context as _;
use roster_core::mode::SyncMode;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Log lines go to stdout and to
/// `<log_dir>/<mode>-<DD-MM-YYYY-HH-MM-SS>.txt`.
///
/// Keep the returned guard alive until exit or buffered file output is lost.
pub fn init(log_dir: &Path, mode: SyncMode) -> anyhow::Result<WorkerGuard> {
  std::fs::create_dir_all(log_dir)
    .with_context(|| format!("creating log directory {}", log_dir.display()))?;

  let stamp = chrono::Local::now().format("%d-%m-%Y-%H-%M-%S");
  let file_name = format!("{mode}-{stamp}.txt");
  let appender = tracing_appender::rolling::never(log_dir, &file_name);
  let (file_writer, guard) = tracing_appender::non_blocking(appender);

  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_target(false))
    .with(fmt::layer().with_ansi(false).with_writer(file_writer))
    .try_init()
    .context("installing tracing subscriber")?;

  tracing::info!(path = %log_dir.join(&file_name).display(), "logging to file");
  Ok(guard)
}
