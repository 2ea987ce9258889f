//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    EmptyEnvelopeSchema, IdEnvelopeSchema, UserDraftSchema, UserEnvelopeSchema, UserSchema,
    UsersEnvelopeSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "JSON CRUD operations over the tb_user table, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        UserDraftSchema,
        UsersEnvelopeSchema,
        UserEnvelopeSchema,
        IdEnvelopeSchema,
        EmptyEnvelopeSchema
    )),
    tags(
        (name = "users", description = "CRUD operations on users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::path::HttpMethod;

    #[rstest]
    #[case("/users", "get", HttpMethod::Get)]
    #[case("/users", "post", HttpMethod::Post)]
    #[case("/users/{id}", "get", HttpMethod::Get)]
    #[case("/users/{id}", "put", HttpMethod::Put)]
    #[case("/users/{id}", "delete", HttpMethod::Delete)]
    #[case("/health/ready", "get", HttpMethod::Get)]
    #[case("/health/live", "get", HttpMethod::Get)]
    fn document_lists_every_operation(
        #[case] path: &str,
        #[case] label: &str,
        #[case] method: HttpMethod,
    ) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get(path).expect("path registered");
        let operation = match method {
            HttpMethod::Get => item.get.as_ref(),
            HttpMethod::Post => item.post.as_ref(),
            HttpMethod::Put => item.put.as_ref(),
            HttpMethod::Delete => item.delete.as_ref(),
            _ => None,
        };
        assert!(operation.is_some(), "{label} {path} missing");
    }

    #[rstest]
    fn document_registers_schemas_under_domain_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        // utoipa replaces :: with . in schema names
        for name in ["crate.domain.User", "crate.domain.UserDraft", "EmptyEnvelope"] {
            assert!(schemas.contains_key(name), "schema {name} missing");
        }
    }
}
