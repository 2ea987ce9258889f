//! Driven port used by readiness checks to confirm storage is reachable.

use async_trait::async_trait;

use super::UserPersistenceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageProbe: Send + Sync {
    /// Run a trivial round trip against storage.
    async fn ping(&self) -> Result<(), UserPersistenceError>;
}
