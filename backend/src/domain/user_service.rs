//! Users CRUD service.
//!
//! Implements the driving ports over a [`UserRepository`]. Each use-case issues
//! a single repository call; persistence failures become internal errors with
//! the cause logged, never returned to clients.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

/// Client-facing message for unknown identifiers.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// How update and delete treat an identifier with no stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingUserPolicy {
    /// Report success whether or not a row matched.
    #[default]
    Idempotent,
    /// Fail with not-found when no row matched.
    Strict,
}

/// Raised when a policy name is neither `idempotent` nor `strict`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown missing user policy `{0}`; expected `idempotent` or `strict`")]
pub struct MissingUserPolicyParseError(String);

impl FromStr for MissingUserPolicy {
    type Err = MissingUserPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idempotent" => Ok(Self::Idempotent),
            "strict" => Ok(Self::Strict),
            _ => Err(MissingUserPolicyParseError(s.to_owned())),
        }
    }
}

impl fmt::Display for MissingUserPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idempotent => f.write_str("idempotent"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Users service implementing [`UsersQuery`] and [`UsersCommand`].
pub struct UserService<R: ?Sized> {
    repository: Arc<R>,
    missing_user_policy: MissingUserPolicy,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            missing_user_policy: self.missing_user_policy,
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a service using the default (idempotent) missing-user policy.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            missing_user_policy: MissingUserPolicy::default(),
        }
    }

    /// Override the missing-user policy.
    #[must_use]
    pub fn with_missing_user_policy(mut self, policy: MissingUserPolicy) -> Self {
        self.missing_user_policy = policy;
        self
    }

    /// Policy applied to update and delete.
    pub fn missing_user_policy(&self) -> MissingUserPolicy {
        self.missing_user_policy
    }

    fn check_matched(&self, matched: bool, id: UserId, operation: &'static str) -> Result<(), Error> {
        if matched {
            return Ok(());
        }
        match self.missing_user_policy {
            MissingUserPolicy::Idempotent => {
                debug!(user_id = %id, operation, "no row matched; reporting success");
                Ok(())
            }
            MissingUserPolicy::Strict => Err(Error::not_found(USER_NOT_FOUND_MESSAGE)),
        }
    }
}

fn map_persistence_error(operation: &'static str, err: UserPersistenceError) -> Error {
    error!(error = %err, operation, "user repository call failed");
    Error::internal(format!("{operation} failed: {err}"))
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(|err| map_persistence_error("list users", err))
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| map_persistence_error("fetch user", err))?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, draft: UserDraft) -> Result<UserId, Error> {
        self.repository
            .insert(&draft)
            .await
            .map_err(|err| map_persistence_error("create user", err))
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<(), Error> {
        let matched = self
            .repository
            .update(id, &draft)
            .await
            .map_err(|err| map_persistence_error("update user", err))?;
        self.check_matched(matched, id, "update user")
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let matched = self
            .repository
            .delete(id)
            .await
            .map_err(|err| map_persistence_error("delete user", err))?;
        self.check_matched(matched, id, "delete user")
    }
}

#[cfg(test)]
mod tests;
