//! roster-server binary.
//!
//! Reads `roster.toml` (or the path given with `--config`), builds an
//! in-memory employee store and serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use roster_core::store::EmployeeStore as _;
use roster_server::{load_config, router, shutdown_signal};
use roster_store_memory::MemoryStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roster employee API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,

  /// Port to listen on; overrides the config file and `PORT`.
  #[arg(short, long)]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = load_config(&cli.config, cli.port)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let store = if server_cfg.seed {
    MemoryStore::seeded()
  } else {
    MemoryStore::new()
  };
  let employees = store
    .list()
    .await
    .context("failed to read the employee store")?
    .len();
  tracing::info!(seeded = server_cfg.seed, employees, "employee store ready");

  let app = router(Arc::new(store));
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on http://{address}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}
