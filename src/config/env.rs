//! Settings read from the process environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

pub const APPLICATION_NAME: &str = "nazma-trust-web";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30;

/// Connection settings for the hosted backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub schema: String,
    pub application_name: String,
}

impl BackendConfig {
    /// Build and validate from the two credentials. Fails before any request is made.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let config = BackendConfig {
            url: url.into().trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.into().trim().to_string(),
            schema: DEFAULT_SCHEMA.to_string(),
            application_name: APPLICATION_NAME.to_string(),
        };
        crate::config::validate_backend(&config)?;
        Ok(config)
    }

    /// `SUPABASE_URL` / `SUPABASE_ANON_KEY`, falling back to the `VITE_`-prefixed names.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = first_var(&["SUPABASE_URL", "VITE_SUPABASE_URL"]).unwrap_or_default();
        let key = first_var(&["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"]).unwrap_or_default();
        let mut config = Self::new(url, key)?;
        if let Some(schema) = first_var(&["SUPABASE_SCHEMA"]) {
            config.schema = schema;
            crate::config::validate_backend(&config)?;
        }
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// Hosted REST endpoint (default).
    Rest,
    /// Direct PostgreSQL connection for self-hosted deployments.
    Postgres,
}

impl std::str::FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rest" => Ok(BackendKind::Rest),
            "postgres" | "postgresql" => Ok(BackendKind::Postgres),
            other => Err(ConfigError::Invalid {
                name: "SITE_BACKEND",
                reason: format!("{} (expected rest or postgres)", other),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cache_ttl: Duration,
    pub backend: BackendKind,
    /// Required when `backend` is `Postgres`.
    pub database_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = first_var(&["SITE_BIND_ADDR"])
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "SITE_BIND_ADDR",
                reason: e.to_string(),
            })?;
        let cache_ttl = match first_var(&["SITE_CACHE_TTL_SECS"]) {
            Some(s) => s.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "SITE_CACHE_TTL_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };
        let backend = match first_var(&["SITE_BACKEND"]) {
            Some(s) => s.parse()?,
            None => BackendKind::Rest,
        };
        let database_url = first_var(&["DATABASE_URL"]);
        if backend == BackendKind::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        Ok(ServerConfig {
            bind_addr,
            cache_ttl: Duration::from_secs(cache_ttl),
            backend,
            database_url,
        })
    }
}

/// First non-empty value among `names`.
fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|n| std::env::var(n).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}
