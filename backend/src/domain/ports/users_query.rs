//! Driving port for user reads.
//!
//! HTTP handlers depend on this port rather than on the repository so that
//! not-found handling and error mapping stay in the domain.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return one user, failing with [`crate::domain::ErrorCode::NotFound`]
    /// when the identifier has no row.
    async fn fetch_user(&self, id: UserId) -> Result<User, Error>;
}
