//! Test doubles shared by unit tests (in `src/`) and integration tests (in
//! `tests/`).
//!
//! Compiled for `cfg(test)` and when the `test-support` feature is enabled.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{StorageProbe, UserPersistenceError, UserRepository};
use crate::domain::{MissingUserPolicy, User, UserDraft, UserId, UserService};
use crate::inbound::http::state::HttpState;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<UserId, UserDraft>,
    next_id: i64,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory stand-in for the `tb_user` table.
///
/// Identifiers start at 1 and are never reused, like a `BIGSERIAL` sequence.
///
/// # Examples
/// ```
/// use users_api::domain::ports::UserRepository;
/// use users_api::domain::UserDraft;
/// use users_api::test_support::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::default();
/// let id = repo.insert(&UserDraft::new("ana", "ana@x.com")).await.unwrap();
/// assert_eq!(id.get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
}

impl InMemoryUserRepository {
    /// Seed the table with users in order, returning the repository.
    pub fn with_users<I>(drafts: I) -> Self
    where
        I: IntoIterator<Item = UserDraft>,
    {
        let mut table = Table::default();
        for draft in drafts {
            let id = UserId::new(table.next_id);
            table.next_id += 1;
            table.rows.insert(id, draft);
        }
        Self {
            table: Mutex::new(table),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, UserPersistenceError> {
        self.table
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory table lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .iter()
            .map(|(id, draft)| User::new(*id, draft.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .get(&id)
            .map(|draft| User::new(id, draft.clone())))
    }

    async fn insert(&self, draft: &UserDraft) -> Result<UserId, UserPersistenceError> {
        let mut table = self.lock()?;
        let id = UserId::new(table.next_id);
        table.next_id += 1;
        table.rows.insert(id, draft.clone());
        Ok(id)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<bool, UserPersistenceError> {
        let mut table = self.lock()?;
        Ok(match table.rows.get_mut(&id) {
            Some(row) => {
                *row = draft.clone();
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut table = self.lock()?;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl StorageProbe for InMemoryUserRepository {
    async fn ping(&self) -> Result<(), UserPersistenceError> {
        self.lock().map(drop)
    }
}

/// Repository whose every call fails with a connection error.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableUserRepository;

impl UnavailableUserRepository {
    fn failure() -> UserPersistenceError {
        UserPersistenceError::connection("connection refused (os error 111)")
    }
}

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Err(Self::failure())
    }

    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Err(Self::failure())
    }

    async fn insert(&self, _draft: &UserDraft) -> Result<UserId, UserPersistenceError> {
        Err(Self::failure())
    }

    async fn update(&self, _id: UserId, _draft: &UserDraft) -> Result<bool, UserPersistenceError> {
        Err(Self::failure())
    }

    async fn delete(&self, _id: UserId) -> Result<bool, UserPersistenceError> {
        Err(Self::failure())
    }
}

#[async_trait]
impl StorageProbe for UnavailableUserRepository {
    async fn ping(&self) -> Result<(), UserPersistenceError> {
        Err(Self::failure())
    }
}

/// Build handler state over `repository` with the given missing-user policy.
pub fn http_state<R>(repository: Arc<R>, policy: MissingUserPolicy) -> HttpState
where
    R: UserRepository + 'static,
{
    HttpState::from_service(UserService::new(repository).with_missing_user_policy(policy))
}
