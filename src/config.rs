use std::env;
use std::net::SocketAddr;

use crate::services::coingecko::DEFAULT_BASE_URL;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub coingecko_base_url: String,
    pub coingecko_api_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            coingecko_base_url: get("COINGECKO_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            coingecko_api_key: get("COINGECKO_API_KEY"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.coingecko_base_url, DEFAULT_BASE_URL);
        assert!(config.coingecko_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("COINGECKO_BASE_URL", "https://pro-api.coingecko.com/api/v3"),
            ("COINGECKO_API_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.coingecko_base_url, "https://pro-api.coingecko.com/api/v3");
        assert_eq!(config.coingecko_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = AppConfig::from_lookup(lookup(&[("COINGECKO_API_KEY", "  ")])).unwrap();
        assert!(config.coingecko_api_key.is_none());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "not-an-address")])).unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}
