use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Mount prefix for the API, e.g. `/api/v1/theater`. Empty mounts at the root.
    pub api_prefix: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let api_prefix = normalize_prefix(lookup("API_PREFIX").as_deref().unwrap_or(""))?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        name: "DB_MAX_CONNECTIONS",
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "DB_MAX_CONNECTIONS",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            bind_addr,
            api_prefix,
            max_connections,
        })
    }
}

fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::Invalid {
            name: "API_PREFIX",
            value: raw.to_string(),
            reason: "must start with '/'".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply() {
        let cfg = load(&[("DATABASE_URL", "postgres://localhost/theater")]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.api_prefix, "");
        assert_eq!(cfg.max_connections, 10);
    }

    #[test]
    fn database_url_is_required() {
        assert!(matches!(load(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn prefix_is_normalized() {
        let cfg = load(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("API_PREFIX", "/api/v1/theater/"),
        ])
        .unwrap();
        assert_eq!(cfg.api_prefix, "/api/v1/theater");
    }

    #[test]
    fn relative_prefix_is_rejected() {
        let err = load(&[("DATABASE_URL", "sqlite::memory:"), ("API_PREFIX", "api")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "API_PREFIX", .. }));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = load(&[("DATABASE_URL", "x"), ("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "DB_MAX_CONNECTIONS", .. }));
        let err = load(&[("DATABASE_URL", "x"), ("BIND_ADDR", "nowhere")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));
    }
}
