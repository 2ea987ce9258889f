//! HTTP inbound adapter exposing the users REST endpoints.

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

use actix_web::web;

use crate::domain::Error;

pub use error::ApiResult;

/// Register the users routes and their extractor configuration.
///
/// Known paths answer unsupported methods with a 405 envelope.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use users_api::domain::UserService;
/// use users_api::inbound::http::{configure, state::HttpState};
/// use users_api::test_support::InMemoryUserRepository;
///
/// let state = HttpState::from_service(UserService::new(Arc::new(
///     InMemoryUserRepository::default(),
/// )));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extractors::path_config())
        .app_data(extractors::json_config())
        .service(
            web::resource("/users")
                .route(web::get().to(users::list_users))
                .route(web::post().to(users::create_user))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/users/{id}")
                .route(web::get().to(users::get_user))
                .route(web::put().to(users::update_user))
                .route(web::delete().to(users::delete_user))
                .default_service(web::to(method_not_allowed)),
        );
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> ApiResult<actix_web::HttpResponse> {
    Err(Error::method_not_allowed("Method not allowed"))
}

/// Application-wide fallback for unmatched routes.
pub async fn unmatched_route() -> ApiResult<actix_web::HttpResponse> {
    Err(Error::not_found("Not found"))
}
