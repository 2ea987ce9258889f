//! HTTP server configuration object.

use std::net::SocketAddr;

use users_api::domain::MissingUserPolicy;
use users_api::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) missing_user_policy: MissingUserPolicy,
}

impl ServerConfig {
    /// Bind `bind_addr` and serve users from `db_pool` with the default
    /// missing-user policy.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            missing_user_policy: MissingUserPolicy::default(),
        }
    }

    /// Override how update and delete treat unknown ids.
    #[must_use]
    pub fn with_missing_user_policy(mut self, policy: MissingUserPolicy) -> Self {
        self.missing_user_policy = policy;
        self
    }
}
