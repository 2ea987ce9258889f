//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they only depend on the driving
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::UserService;
use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};

/// Dependency bundle for the users handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_query: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
        }
    }

    /// Construct state where one [`UserService`] serves both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_api::domain::{MissingUserPolicy, UserService};
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::test_support::InMemoryUserRepository;
    ///
    /// let service = UserService::new(Arc::new(InMemoryUserRepository::default()))
    ///     .with_missing_user_policy(MissingUserPolicy::Strict);
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<R>(service: UserService<R>) -> Self
    where
        R: UserRepository + ?Sized + 'static,
    {
        let service = Arc::new(service);
        Self {
            users_query: service.clone(),
            users_command: service,
        }
    }
}
