//! Users CRUD handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users       {"username":"ana","email":"ana@x.com"}
//! PUT    /users/{id}  {"username":"ana","email":"ana@x.com"}
//! DELETE /users/{id}
//! ```
//!
//! Every response body is an [`Envelope`].

use actix_web::web;

use crate::domain::{UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{Envelope, Payload};
use crate::inbound::http::schemas::{
    EmptyEnvelopeSchema, IdEnvelopeSchema, UserDraftSchema, UserEnvelopeSchema,
    UsersEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

/// List every stored user in ascending id order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users retrieved", body = UsersEnvelopeSchema),
        (status = 500, description = "Internal server error", body = EmptyEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<Envelope> {
    let users = state.users_query.list_users().await?;
    Ok(Envelope::ok("Users retrieved", Payload::Users(users)))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User retrieved", body = UserEnvelopeSchema),
        (status = 400, description = "Invalid user id", body = EmptyEnvelopeSchema),
        (status = 404, description = "User not found", body = EmptyEnvelopeSchema),
        (status = 500, description = "Internal server error", body = EmptyEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<UserId>,
) -> ApiResult<Envelope> {
    let user = state.users_query.fetch_user(id.into_inner()).await?;
    Ok(Envelope::ok("User retrieved", Payload::User(user)))
}

/// Create a user and return the storage-assigned id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserDraftSchema,
    responses(
        (status = 200, description = "User created", body = IdEnvelopeSchema),
        (status = 400, description = "Invalid request body", body = EmptyEnvelopeSchema),
        (status = 500, description = "Internal server error", body = EmptyEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserDraft>,
) -> ApiResult<Envelope> {
    let id = state.users_command.create_user(payload.into_inner()).await?;
    Ok(Envelope::ok("User created", Payload::Id(id)))
}

/// Replace the username and email of a user.
///
/// Under the `strict` missing-user policy an unknown id yields 404.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserDraftSchema,
    responses(
        (status = 200, description = "User updated", body = EmptyEnvelopeSchema),
        (status = 400, description = "Invalid user id or request body", body = EmptyEnvelopeSchema),
        (status = 404, description = "User not found (strict policy)", body = EmptyEnvelopeSchema),
        (status = 500, description = "Internal server error", body = EmptyEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<UserId>,
    payload: web::Json<UserDraft>,
) -> ApiResult<Envelope> {
    state
        .users_command
        .update_user(id.into_inner(), payload.into_inner())
        .await?;
    Ok(Envelope::ok("User updated", Payload::Absent))
}

/// Delete a user.
///
/// Under the `strict` missing-user policy an unknown id yields 404.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = EmptyEnvelopeSchema),
        (status = 400, description = "Invalid user id", body = EmptyEnvelopeSchema),
        (status = 404, description = "User not found (strict policy)", body = EmptyEnvelopeSchema),
        (status = 500, description = "Internal server error", body = EmptyEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<UserId>,
) -> ApiResult<Envelope> {
    state.users_command.delete_user(id.into_inner()).await?;
    Ok(Envelope::ok("User deleted", Payload::Absent))
}
