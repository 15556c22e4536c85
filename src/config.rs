//! Runtime configuration.
//!
//! Values are read from environment variables:
//! - `TASKDECK_HOST` - Optional. Bind address. Defaults to `127.0.0.1`.
//! - `TASKDECK_PORT` - Optional. Bind port. Defaults to `8080`.
//! - `DATABASE_URL` - Optional. PostgreSQL connection string. Tasks are kept
//!   in memory when unset.
//! - `TASKDECK_DB_POOL_SIZE` - Optional. Maximum pooled connections.
//!   Defaults to `8`.
//! - `TASKDECK_SWEEP_INTERVAL_SECS` - Optional. Seconds between deadline
//!   sweeps. Defaults to `60`.

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const HOST_VAR: &str = "TASKDECK_HOST";
const PORT_VAR: &str = "TASKDECK_PORT";
const DATABASE_URL_VAR: &str = "DATABASE_URL";
const POOL_SIZE_VAR: &str = "TASKDECK_DB_POOL_SIZE";
const SWEEP_INTERVAL_VAR: &str = "TASKDECK_SWEEP_INTERVAL_SECS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be used.
    #[error("invalid value for {0}: {1:?}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// PostgreSQL connection string; `None` selects in-memory storage.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_size: u32,
    /// Time between deadline sweeps.
    pub sweep_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed,
    /// or when the pool size or sweep interval is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let host = read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_or(read(PORT_VAR), PORT_VAR, DEFAULT_PORT)?;
        let database_url = read(DATABASE_URL_VAR);
        let pool_size = positive(
            parse_or(read(POOL_SIZE_VAR), POOL_SIZE_VAR, DEFAULT_POOL_SIZE)?,
            POOL_SIZE_VAR,
        )?;
        let sweep_secs = positive(
            parse_or(
                read(SWEEP_INTERVAL_VAR),
                SWEEP_INTERVAL_VAR,
                DEFAULT_SWEEP_INTERVAL_SECS,
            )?,
            SWEEP_INTERVAL_VAR,
        )?;

        Ok(Self {
            host,
            port,
            database_url,
            pool_size,
            sweep_interval: Duration::from_secs(sweep_secs),
        })
    }

    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, name: &str, default: T) -> Result<T, ConfigError> {
    value.map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_owned(), raw))
    })
}

fn positive<T>(value: T, name: &str) -> Result<T, ConfigError>
where
    T: Default + PartialEq + ToString,
{
    if value == T::default() {
        return Err(ConfigError::InvalidValue(name.to_owned(), value.to_string()));
    }
    Ok(value)
}
