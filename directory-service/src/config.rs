use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime settings read from the environment at start-up
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// BIND_ADDRESS, defaults to 0.0.0.0
    pub bind_address: IpAddr,
    /// PORT, defaults to 8000
    pub port: u16,
    /// API_PREFIX, e.g. "/v1"; empty serves routes at the root
    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = match lookup("BIND_ADDRESS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "BIND_ADDRESS",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let api_prefix = lookup("API_PREFIX").unwrap_or_default();
        if !api_prefix.is_empty() && (!api_prefix.starts_with('/') || api_prefix.ends_with('/')) {
            return Err(ConfigError::InvalidValue {
                name: "API_PREFIX",
                value: api_prefix,
            });
        }

        Ok(Self {
            bind_address,
            port,
            api_prefix,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.api_prefix, "");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDRESS", "127.0.0.1"),
            ("PORT", "9090"),
            ("API_PREFIX", "/v1"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:9090".parse().unwrap());
        assert_eq!(config.api_prefix, "/v1");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "PORT",
                value: "eighty".into()
            }
        );
    }

    #[test]
    fn test_prefix_must_be_rooted() {
        assert!(Config::from_lookup(lookup_from(&[("API_PREFIX", "v1")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("API_PREFIX", "/v1/")])).is_err());
    }
}
