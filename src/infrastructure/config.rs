//! Environment configuration

use std::net::SocketAddr;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("DATABASE_URL is not a valid PostgreSQL connection string: {0}")]
    InvalidDatabaseUrl(String),

    #[error("BIND_ADDR `{0}` is not a socket address")]
    InvalidBindAddr(String),

    #[error("DATABASE_MAX_CONNECTIONS `{0}` is not a positive integer")]
    InvalidMaxConnections(String),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    /// Reads the environment, `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        if !(database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")) {
            return Err(ConfigError::InvalidDatabaseUrl(
                "expected a postgres:// or postgresql:// URL".to_string(),
            ));
        }
        database_url
            .parse::<PgConnectOptions>()
            .map_err(|err| ConfigError::InvalidDatabaseUrl(err.to_string()))?;

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            },
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
