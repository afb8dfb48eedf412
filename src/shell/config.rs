// Runtime configuration, read from the environment once at start-up.
//
// - EVENTS_ADDR: socket address to listen on (default 0.0.0.0:8080).
// - EVENTS_SEED: whether the store starts with the fixture records (default true).

use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid EVENTS_ADDR '{0}'")]
    InvalidAddr(String),

    #[error("invalid EVENTS_SEED '{0}', expected true or false")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub seed_fixtures: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("EVENTS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let seed_fixtures = match lookup("EVENTS_SEED") {
            None => true,
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
        };

        Ok(Self {
            addr,
            seed_fixtures,
        })
    }
}
