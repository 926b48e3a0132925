//! Rolodex server binary.
//!
//! Loads `.env` (if present), reads `rolodex.toml` (or the path given with
//! `--config`) layered under `ROLODEX_*` environment variables, opens the
//! SQLite document store, and serves the JSON API over HTTP.
//!
//! Startup fails fast: if the store cannot be opened the process exits
//! with an error instead of serving requests it cannot answer.

mod settings;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use rolodex_api::{AppState, StoreHandle};
use rolodex_store_sqlite::SqliteStore;
use settings::ServerConfig;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Rolodex contacts API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "rolodex.toml")]
  config: PathBuf,

  /// Print the resolved configuration as JSON and exit.
  #[arg(long)]
  check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // A missing .env file is normal outside local development.
  let dotenv = dotenvy::dotenv();

  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  if let Ok(path) = dotenv {
    tracing::debug!(path = %path.display(), "loaded environment file");
  }

  let cli = Cli::parse();

  // Load configuration.
  let mut server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  // Helper mode: show what would be used and exit.
  if cli.check_config {
    println!("{}", serde_json::to_string_pretty(&server_cfg)?);
    return Ok(());
  }

  // Expand `~` in the database path.
  server_cfg.database_path = expand_tilde(&server_cfg.database_path);

  // Connect and install the store handle.
  let store = SqliteStore::connect(&server_cfg.connection())
    .await
    .with_context(|| {
      format!("failed to open database at {:?}", server_cfg.database_path)
    })?;
  tracing::info!(
    database = %store.database(),
    path = %server_cfg.database_path.display(),
    "database connected"
  );

  let handle = StoreHandle::empty();
  handle
    .install(store)
    .context("failed to install store handle")?;

  let app = rolodex_api::api_router(AppState::with_handle(handle));
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Listening on http://{address}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

/// Resolve once Ctrl-C is received.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutdown requested");
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
