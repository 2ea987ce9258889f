//! Users CRUD service library.
//!
//! Layout follows ports and adapters:
//! - [`domain`]: user types, errors, ports and the CRUD service.
//! - [`inbound`]: actix-web handlers rendering response envelopes.
//! - [`outbound`]: Diesel-backed PostgreSQL repository.
//! - [`middleware`]: request trace identifiers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
