//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their shape and register under the domain names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Storage-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "ana")]
    username: String,
    #[schema(example = "ana@x.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::UserDraft`].
///
/// An `id` in the request body is accepted and ignored.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserDraft)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserDraftSchema {
    #[schema(example = "ana")]
    username: String,
    #[schema(example = "ana@x.com")]
    email: String,
}

/// Envelope whose `data` is a list of users.
#[derive(ToSchema)]
#[schema(as = UsersEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UsersEnvelopeSchema {
    #[schema(example = 200)]
    code: u16,
    success: bool,
    #[schema(example = "Users retrieved")]
    message: String,
    data: Vec<UserSchema>,
}

/// Envelope whose `data` is a single user.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    #[schema(example = 200)]
    code: u16,
    success: bool,
    #[schema(example = "User retrieved")]
    message: String,
    data: UserSchema,
}

/// Envelope whose `data` is the identifier of a created user.
#[derive(ToSchema)]
#[schema(as = IdEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct IdEnvelopeSchema {
    #[schema(example = 200)]
    code: u16,
    success: bool,
    #[schema(example = "User created")]
    message: String,
    #[schema(example = 1)]
    data: i64,
}

/// Envelope with `data: null`, used for updates, deletes and all failures.
#[derive(ToSchema)]
#[schema(as = EmptyEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmptyEnvelopeSchema {
    #[schema(example = 404)]
    code: u16,
    #[schema(example = false)]
    success: bool,
    #[schema(example = "User not found")]
    message: String,
    data: Option<serde_json::Value>,
}
