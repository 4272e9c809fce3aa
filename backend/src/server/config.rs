//! HTTP server configuration loaded from the environment.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const BIND_ADDR_VAR: &str = "BIND_ADDR";
const SEED_VAR: &str = "SEED_EXAMPLE_DATA";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Environment variable carried an unusable value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {BIND_ADDR_VAR} value {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
    /// Seed example projects into the store on startup.
    pub seed_example_data: bool,
}

impl ServerConfig {
    /// Read configuration from `BIND_ADDR` and `SEED_EXAMPLE_DATA`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr = env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        Ok(Self {
            bind_addr: parse_bind_addr(&raw_addr)?,
            seed_example_data: env::var(SEED_VAR).ok().as_deref() == Some("1"),
        })
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|source| ConfigError::InvalidBindAddr {
        value: raw.to_owned(),
        source,
    })
}
