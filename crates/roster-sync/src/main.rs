//! `roster` — reconcile the system of record against the HR registry.
//!
//! # Usage
//!
//! ```text
//! roster insert
//! roster --config /etc/roster.toml dismiss
//! roster            # prompts for the mode
//! ```
//!
//! Configuration comes from `roster.toml` (optional) and `ROSTER_*`
//! environment variables; a `.env` file in the working directory is loaded
//! first.

mod logging;

use std::{
  io::{self, BufRead, Write},
  path::PathBuf,
};

use anyhow::Context as _;
use clap::Parser;
use roster_core::mode::SyncMode;
use roster_registry::HttpRegistry;
use roster_source_sqlite::SqliteSource;
use roster_sync::{SyncConfig, run::Orchestrator};
use strum::VariantNames as _;

#[derive(Parser)]
#[command(author, version, about = "Sync employees, companies, and workplaces to the HR registry")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,

  /// insert | update | dismiss | companyupload | workplaceupload
  #[arg(allow_hyphen_values = true)]
  mode: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  let cli = Cli::parse();

  let raw_mode = match cli.mode {
    Some(m) => m,
    None => prompt_mode()?,
  };
  let mode = SyncMode::parse_arg(&raw_mode)?;

  let config = SyncConfig::load(&cli.config).context("loading configuration")?;
  let _log_guard = logging::init(&config.log_dir, mode)?;
  tracing::info!(%mode, "starting");

  let source_path = config.source_path()?;
  let source = SqliteSource::open(source_path)
    .await
    .with_context(|| format!("opening source snapshot {}", source_path.display()))?;
  let registry =
    HttpRegistry::new(config.registry()?).context("building registry client")?;

  let report = Orchestrator::from_config(&source, &registry, &config)?
    .run(mode)
    .await
    .context("run aborted")?;

  for (external_id, outcome) in &report.outcomes {
    if outcome.is_failure() {
      tracing::warn!(%external_id, %outcome, "record not synchronised");
    }
  }
  println!("{mode}: {report}");
  Ok(())
}

/// Ask for the mode on stdin when none was given on the command line.
fn prompt_mode() -> anyhow::Result<String> {
  print!("Mode ({}): ", SyncMode::VARIANTS.join(", "));
  io::stdout().flush().ok();
  let mut line = String::new();
  io::stdin()
    .lock()
    .read_line(&mut line)
    .context("reading mode from stdin")?;
  Ok(line.trim().to_string())
}
