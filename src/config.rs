use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::utils::redact::redact_url;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_connect_timeout_secs: u64,
    pub database_ping_on_acquire: bool,
    pub server_host: String,
    pub server_port: u16,
    pub password_hash_memory_kib: u32,
    pub password_hash_iterations: u32,
    pub rate_limit_burst: u32,
    pub rate_limit_replenish_ms: u64,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::Internal("DATABASE_URL must be set".to_string()))?;

        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => parse_value("SERVER_PORT", &raw)?,
            None => 3001,
        };

        Ok(Self {
            database_url,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 1)?,
            database_connect_timeout_secs: parse_or(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 10)?,
            database_ping_on_acquire: parse_or(&lookup, "DATABASE_PING_ON_ACQUIRE", true)?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            password_hash_memory_kib: parse_or(&lookup, "PASSWORD_HASH_MEMORY_KIB", 19_456)?,
            password_hash_iterations: parse_or(&lookup, "PASSWORD_HASH_ITERATIONS", 3)?,
            rate_limit_burst: parse_or(&lookup, "RATE_LIMIT_BURST", 100)?,
            rate_limit_replenish_ms: parse_or(&lookup, "RATE_LIMIT_REPLENISH_MS", 600)?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &redact_url(&self.database_url))
            .field("database_max_connections", &self.database_max_connections)
            .field("database_connect_timeout_secs", &self.database_connect_timeout_secs)
            .field("database_ping_on_acquire", &self.database_ping_on_acquire)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("password_hash_memory_kib", &self.password_hash_memory_kib)
            .field("password_hash_iterations", &self.password_hash_iterations)
            .field("rate_limit_burst", &self.rate_limit_burst)
            .field("rate_limit_replenish_ms", &self.rate_limit_replenish_ms)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Internal(format!("{} must be a valid value, got {:?}", key, raw)))
}
