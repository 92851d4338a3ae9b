use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, SchemaError};

/// Configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// How long to keep retrying the initial connection
    pub connect_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present; variables already set win
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// The connection string is parsed but no connection is attempted, so a
    /// bad value fails before any network I/O.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(SchemaError::MissingDatabaseUrl)?;

        PgConnectOptions::from_str(&database_url).map_err(SchemaError::InvalidDatabaseUrl)?;

        let connect_timeout = match lookup("DATABASE_CONNECT_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| SchemaError::InvalidSetting {
                    key: "DATABASE_CONNECT_TIMEOUT_SECS",
                    value: v,
                })?,
            None => Duration::from_secs(30),
        };

        Ok(Self {
            database_url,
            connect_timeout,
        })
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        PgConnectOptions::from_str(&self.database_url).map_err(SchemaError::InvalidDatabaseUrl)
    }
}

// Credentials live in the URL, so keep it out of Debug output
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
