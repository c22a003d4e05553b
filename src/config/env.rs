//! `AppConfig` from environment variables. Every setting has a default so a bare `cargo run` works.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5555";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Insert demo bakeries on startup when the table is empty.
    pub seed_demo_data: bool,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr: SocketAddr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), Some(DEFAULT_MAX_CONNECTIONS))?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let max_body_bytes = parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), Some(DEFAULT_MAX_BODY_BYTES))?;
        let seed_demo_data = match get("SEED_DEMO_DATA") {
            None => false,
            Some(v) => parse_flag(&v).ok_or(ConfigError::Invalid {
                key: "SEED_DEMO_DATA",
                value: v,
            })?,
        };

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            seed_demo_data,
            max_body_bytes,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
        None => default.ok_or(ConfigError::Missing(key)),
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
