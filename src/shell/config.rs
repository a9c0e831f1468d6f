use std::net::SocketAddr;
use std::num::NonZeroUsize;

use anyhow::{Context, Result};

use crate::modules::events::core::pagination::DEFAULT_PAGE_SIZE;

const LISTEN_ADDR: &str = "EVENTS_LISTEN_ADDR";
const LOG_LEVEL: &str = "EVENTS_LOG_LEVEL";
const DEFAULT_PAGE_SIZE_VAR: &str = "EVENTS_DEFAULT_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    pub default_page_size: NonZeroUsize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr: SocketAddr = lookup(LISTEN_ADDR)
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{LISTEN_ADDR} must be a socket address"))?;

        let log_level = lookup(LOG_LEVEL).unwrap_or_else(|| "info".to_string());

        let default_page_size: NonZeroUsize = match lookup(DEFAULT_PAGE_SIZE_VAR) {
            Some(raw) => raw
                .parse::<NonZeroUsize>()
                .with_context(|| format!("{DEFAULT_PAGE_SIZE_VAR} must be a positive integer"))?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            listen_addr,
            log_level,
            default_page_size,
        })
    }
}
