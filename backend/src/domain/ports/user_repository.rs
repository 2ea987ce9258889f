//! Driven port for `tb_user` persistence and its errors.
//!
//! Every method maps to exactly one SQL statement. Mutations report whether a
//! row matched so callers can apply their own missing-row policy without a
//! second query.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// A storage connection could not be obtained.
        Connection { message: String } => "user repository connection failed: {message}",
        /// The statement failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user, ordered by ascending identifier.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new row and return the identifier storage assigned to it.
    async fn insert(&self, draft: &UserDraft) -> Result<UserId, UserPersistenceError>;

    /// Overwrite username and email of a row. Returns `false` when no row matched.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<bool, UserPersistenceError>;

    /// Delete a row. Returns `false` when no row matched.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
