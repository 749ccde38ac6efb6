//! Backend settings validation.

use crate::config::BackendConfig;
use crate::error::ConfigError;

pub fn validate_backend(config: &BackendConfig) -> Result<(), ConfigError> {
    if config.url.is_empty() {
        return Err(ConfigError::Missing("SUPABASE_URL"));
    }
    if config.anon_key.is_empty() {
        return Err(ConfigError::Missing("SUPABASE_ANON_KEY"));
    }
    let url = reqwest::Url::parse(&config.url).map_err(|e| ConfigError::Invalid {
        name: "SUPABASE_URL",
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            name: "SUPABASE_URL",
            reason: format!("unsupported scheme {}", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::Invalid {
            name: "SUPABASE_URL",
            reason: "missing host".into(),
        });
    }
    if config.anon_key.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid {
            name: "SUPABASE_ANON_KEY",
            reason: "must not contain whitespace".into(),
        });
    }
    if !is_identifier(&config.schema) {
        return Err(ConfigError::Invalid {
            name: "SUPABASE_SCHEMA",
            reason: format!("{} is not a valid identifier", config.schema),
        });
    }
    Ok(())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
