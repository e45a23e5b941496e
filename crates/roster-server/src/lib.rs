//! HTTP server assembly for Roster.
//!
//! Wraps the [`roster_api`] router with permissive CORS and request tracing,
//! and loads the layered [`ServerConfig`].

use std::{path::Path, sync::Arc};

use axum::Router;
use config::{Config, ConfigError, Environment, File, Source};
use roster_core::store::EmployeeStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

pub const DEFAULT_PORT: u16 = 3000;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  /// Start with the sample employees instead of an empty store.
  pub seed: bool,
}

impl ServerConfig {
  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

/// Load configuration from, in increasing priority: built-in defaults, the
/// optional TOML file at `path`, `ROSTER_*` environment variables, a plain
/// `PORT` environment variable, and `port_flag`.
pub fn load_config(
  path: &Path,
  port_flag: Option<u16>,
) -> Result<ServerConfig, ConfigError> {
  layered(
    File::from(path).required(false),
    std::env::var("PORT").ok(),
    port_flag,
  )
}

fn layered<F>(
  file: F,
  env_port: Option<String>,
  port_flag: Option<u16>,
) -> Result<ServerConfig, ConfigError>
where
  F: Source + Send + Sync + 'static,
{
  Config::builder()
    .set_default("host", "0.0.0.0")?
    .set_default("port", i64::from(DEFAULT_PORT))?
    .set_default("seed", true)?
    .add_source(file)
    .add_source(Environment::with_prefix("ROSTER"))
    .set_override_option("port", env_port)?
    .set_override_option("port", port_flag.map(i64::from))?
    .build()?
    .try_deserialize()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application: the employee API with cross-origin access
/// allowed from anywhere and per-request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: EmployeeStore + 'static,
{
  roster_api::api_router(store)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

// ─── Shutdown ─────────────────────────────────────────────────────────────────

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  ctrl_c.await;

  #[cfg(unix)]
  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }

  tracing::info!("shutting down");
}
