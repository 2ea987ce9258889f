//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags (`--database-url`), environment variables
//! (`USERS_DATABASE_URL`) and the configuration file, in that precedence.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use users_api::domain::{MissingUserPolicy, MissingUserPolicyParseError};
use users_api::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, PoolConfig, PoolError,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Raised when loaded settings cannot be turned into a runnable server.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("database_url is required (set USERS_DATABASE_URL or pass --database-url)")]
    MissingDatabaseUrl,
    #[error(transparent)]
    InvalidPolicy(#[from] MissingUserPolicyParseError),
    #[error("invalid pool limits: {0}")]
    InvalidPoolLimits(#[source] PoolError),
    #[error("cannot resolve bind address {host}:{port}: {reason}")]
    InvalidBindAddress {
        host: String,
        port: u16,
        reason: String,
    },
}

/// Configuration for the users service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServiceSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Host to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept open.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// `idempotent` or `strict`.
    pub missing_user_policy: Option<String>,
}

impl ServiceSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve `host:port` to the first matching socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let (host, port) = (self.host(), self.port());
        let invalid = |reason: String| SettingsError::InvalidBindAddress {
            host: host.to_owned(),
            port,
            reason,
        };
        (host, port)
            .to_socket_addrs()
            .map_err(|err| invalid(err.to_string()))?
            .next()
            .ok_or_else(|| invalid("no addresses found".to_owned()))
    }

    /// Build the pool configuration, failing when no database URL is set or
    /// the pool limits are unusable.
    ///
    /// An unset `pool_min_idle` defaults to two, capped at `pool_max_size`.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let url = self
            .database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)?;
        let timeout = self
            .pool_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs);
        let max_size = self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE);
        let min_idle = self
            .pool_min_idle
            .unwrap_or_else(|| DEFAULT_MIN_IDLE.min(max_size));
        let config = PoolConfig::new(url)
            .with_max_size(max_size)
            .with_min_idle(Some(min_idle))
            .with_connection_timeout(timeout);
        config.validate().map_err(SettingsError::InvalidPoolLimits)?;
        Ok(config)
    }

    pub fn missing_user_policy(&self) -> Result<MissingUserPolicy, SettingsError> {
        match self.missing_user_policy.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(MissingUserPolicy::default()),
        }
    }
}
