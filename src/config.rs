//! Environment-derived server configuration.
//!
//! Configuration is read once at startup; invalid values are reported as
//! [`ConfigError`]s before the server binds, never at request time.

use std::env;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// Storage backend selection with its backend-specific settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Process-local in-memory store; state is lost on shutdown.
    InMemory,
    /// `PostgreSQL` store reached through a connection pool.
    Postgres {
        /// Connection string for the task database.
        database_url: String,
    },
}

impl StorageConfig {
    /// Returns the mode name without backend settings, safe for logging.
    #[must_use]
    pub const fn mode_name(&self) -> &'static str {
        match self {
            Self::InMemory => "in_memory",
            Self::Postgres { .. } => "postgres",
        }
    }
}

/// Runtime configuration read from the environment.
///
/// Recognized variables: `HOST`, `PORT`, `STORAGE_MODE`, `DATABASE_URL`,
/// and `DEBUG_ERRORS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub host: IpAddr,
    /// Port the listener binds to.
    pub port: u16,
    /// Selected storage backend.
    pub storage: StorageConfig,
    /// Whether store-failure detail is included in responses.
    pub debug_errors: bool,
}

impl ServerConfig {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is present but invalid, or
    /// when `STORAGE_MODE=postgres` without a `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_raw = trimmed(lookup("HOST")).unwrap_or_else(|| "0.0.0.0".to_owned());
        let host: IpAddr = host_raw
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port = match trimmed(lookup("PORT")) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let mode = trimmed(lookup("STORAGE_MODE")).unwrap_or_else(|| "in_memory".to_owned());
        let storage = match mode.to_ascii_lowercase().as_str() {
            "in_memory" => StorageConfig::InMemory,
            "postgres" => {
                let database_url =
                    trimmed(lookup("DATABASE_URL")).ok_or(ConfigError::MissingDatabaseUrl)?;
                StorageConfig::Postgres { database_url }
            }
            _ => return Err(ConfigError::InvalidStorageMode(mode)),
        };

        let debug_errors = trimmed(lookup("DEBUG_ERRORS"))
            .is_some_and(|value| matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes"));

        Ok(Self {
            host,
            port,
            storage,
            debug_errors,
        })
    }

    /// Returns the socket address the server binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Normalizes an environment value, treating blank values as absent.
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `HOST` is not a valid IP address.
    #[error("invalid HOST value: {0}")]
    InvalidHost(String),

    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    /// `STORAGE_MODE` names an unknown backend.
    #[error("unknown STORAGE_MODE: {0}, expected in_memory or postgres")]
    InvalidStorageMode(String),

    /// `DATABASE_URL` is required for the selected backend.
    #[error("DATABASE_URL is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,
}
