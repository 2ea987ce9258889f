//! Extractor configuration for the users endpoints.
//!
//! Path and JSON decode failures are turned into domain errors so they render
//! as failure envelopes instead of actix-web's plain-text defaults.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::Error;

/// Message for a path segment that is not a valid user id.
pub const INVALID_USER_ID_MESSAGE: &str = "Invalid user id";
/// Message for a body that cannot be decoded into a user draft.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected user id path segment");
    Error::invalid_request(INVALID_USER_ID_MESSAGE).into()
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected request body");
    Error::invalid_request(INVALID_BODY_MESSAGE).into()
}

/// Path extractor configuration mapping failures to `Invalid user id`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

/// JSON extractor configuration.
///
/// Bodies are decoded regardless of `Content-Type`; failures map to
/// `Invalid request body`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}
