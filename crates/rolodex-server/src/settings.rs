//! Runtime server configuration.
//!
//! Layered, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the TOML file named by `--config` (optional)
//! 3. `ROLODEX_*` environment variables, e.g. `ROLODEX_DATABASE_PATH`
//! 4. a bare `PORT` variable, as set by most hosting platforms

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use rolodex_store_sqlite::ConnectionConfig;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "ROLODEX";

/// Runtime server configuration, deserialised from `rolodex.toml` and the
/// environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:          String,
  #[serde(default = "default_port")]
  pub port:          u16,
  #[serde(default = "default_database_path")]
  pub database_path: PathBuf,
  #[serde(default = "default_database_name")]
  pub database_name: String,
}

fn default_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 3000 }

fn default_database_path() -> PathBuf { PathBuf::from("rolodex.db") }

fn default_database_name() -> String { "contacts".to_owned() }

impl ServerConfig {
  /// Resolve the configuration from `path` and the process environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let mut builder = Config::builder()
      .add_source(File::from(path.to_path_buf()).required(false))
      .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
    if let Ok(port) = std::env::var("PORT") {
      builder = builder.set_override("port", port)?;
    }
    Self::from_settings(builder.build()?)
  }

  pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
    settings.try_deserialize()
  }

  /// `host:port`, ready for `TcpListener::bind`.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn connection(&self) -> ConnectionConfig {
    ConnectionConfig {
      path:     self.database_path.clone(),
      database: self.database_name.clone(),
    }
  }
}
