// kasir_api/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

/// Output style for the tracing subscriber installed in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,
  pub log_format: LogFormat,
}

impl AppConfig {
  /// Loads `.env` if present, then reads the process environment.
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the config from an arbitrary key lookup.
  ///
  /// `DB_CONN` is the primary store URL; `DATABASE_URL` is accepted as a
  /// fallback so the usual sqlx tooling variable also works.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |var_name: &str| lookup(var_name).filter(|v| !v.trim().is_empty());

    let server_host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
    let server_port = get("PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;

    let database_url = get("DB_CONN")
      .or_else(|| get("DATABASE_URL"))
      .ok_or_else(|| AppError::Config("Missing environment variable 'DB_CONN'".to_string()))?;

    let db_max_connections = get("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|| "10".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }

    let log_format = match get("LOG_FORMAT").as_deref().map(str::to_ascii_lowercase).as_deref() {
      None | Some("pretty") | Some("text") => LogFormat::Pretty,
      Some("json") => LogFormat::Json,
      Some(other) => return Err(AppError::Config(format!("Invalid LOG_FORMAT value: {}", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn defaults_apply_when_only_db_conn_is_set() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("DB_CONN", "sqlite::memory:")])).unwrap();
    assert_eq!(cfg.server_host, "0.0.0.0");
    assert_eq!(cfg.server_port, 8080);
    assert_eq!(cfg.db_max_connections, 10);
    assert_eq!(cfg.log_format, LogFormat::Pretty);
    assert_eq!(cfg.bind_address(), "0.0.0.0:8080");
  }

  #[test]
  fn database_url_is_a_fallback_for_db_conn() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x@y/z")])).unwrap();
    assert_eq!(cfg.database_url, "postgres://x@y/z");

    let cfg = AppConfig::from_lookup(lookup_from(&[
      ("DB_CONN", "postgres://primary/db"),
      ("DATABASE_URL", "postgres://fallback/db"),
    ]))
    .unwrap();
    assert_eq!(cfg.database_url, "postgres://primary/db");
  }

  #[test]
  fn missing_db_conn_is_a_config_error() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("DB_CONN")));
  }

  #[test]
  fn invalid_numbers_are_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("DB_CONN", "sqlite::memory:"), ("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("PORT")));

    let err = AppConfig::from_lookup(lookup_from(&[("DB_CONN", "sqlite::memory:"), ("DB_MAX_CONNECTIONS", "0")]))
      .unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
  }

  #[test]
  fn log_format_accepts_json_case_insensitively() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("DB_CONN", "sqlite::memory:"), ("LOG_FORMAT", "JSON")])).unwrap();
    assert_eq!(cfg.log_format, LogFormat::Json);

    let err = AppConfig::from_lookup(lookup_from(&[("DB_CONN", "sqlite::memory:"), ("LOG_FORMAT", "xml")])).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
  }
}
