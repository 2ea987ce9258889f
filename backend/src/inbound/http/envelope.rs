//! Uniform JSON response wrapper.
//!
//! Every reply from the users API, success or failure, is an [`Envelope`]:
//!
//! ```json
//! {"code": 200, "success": true, "message": "User retrieved", "data": {...}}
//! ```
//!
//! `code` always equals the HTTP status sent with the body.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::domain::{User, UserId};

/// Envelope payload.
///
/// Serialised without a tag: `Absent` becomes `null`, `Users` an array,
/// `User` an object and `Id` a bare integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// Ordered sequence of users.
    Users(Vec<User>),
    /// A single user.
    User(User),
    /// A storage-assigned identifier.
    Id(UserId),
    /// No payload.
    Absent,
}

/// Response envelope carrying status, success flag, message, and payload.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use users_api::inbound::http::envelope::{Envelope, Payload};
///
/// let envelope = Envelope::failure(StatusCode::NOT_FOUND, "User not found");
/// assert_eq!(envelope.code(), 404);
/// assert!(!envelope.success());
/// assert_eq!(envelope.data(), &Payload::Absent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    code: u16,
    success: bool,
    message: String,
    data: Payload,
}

impl Envelope {
    /// Build a 200 envelope around `data`.
    pub fn ok(message: impl Into<String>, data: Payload) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            success: true,
            message: message.into(),
            data,
        }
    }

    /// Build a failure envelope for `status` with no payload.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            success: false,
            message: message.into(),
            data: Payload::Absent,
        }
    }

    /// Numeric status mirrored from the HTTP response.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Whether the operation completed without a reported fault.
    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    /// Human-readable outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Response payload.
    #[must_use]
    pub fn data(&self) -> &Payload {
        &self.data
    }

    /// Consume the envelope, returning its payload.
    #[must_use]
    pub fn into_data(self) -> Payload {
        self.data
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Render the envelope as an HTTP response with the matching status.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status()).json(self)
    }
}

impl Responder for Envelope {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_response()
    }
}
