use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::locale::Locale;

pub const PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PETBOX_HOST must be an IP address like 0.0.0.0 or 127.0.0.1, got {0:?}")]
    InvalidHost(String),
    #[error("PETBOX_LOCALE must be one of en, zh, got {0:?}")]
    InvalidLocale(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub locale: Locale,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            locale: Locale::En,
        }
    }
}

impl ServiceConfig {
    /// Listen address. Only the host is configurable; the port is always `PORT`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, PORT)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or blank values fall back
    /// to the defaults; set values must parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut cfg = Self::default();

        if let Some(raw) = get("PETBOX_HOST") {
            cfg.host = raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?;
        }
        if let Some(raw) = get("PETBOX_LOCALE") {
            cfg.locale =
                Locale::parse(&raw).ok_or_else(|| ConfigError::InvalidLocale(raw.clone()))?;
        }

        Ok(cfg)
    }
}
