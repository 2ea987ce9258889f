//! Domain primitives, ports, and the user service.
//!
//! Purpose: keep the users CRUD rules independent of actix-web and Diesel.
//! Inbound adapters call the driving ports in [`ports`]; outbound adapters
//! implement the driven [`ports::UserRepository`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - User / UserId / UserDraft: the `tb_user` row and its create/update input.
//! - UserService / MissingUserPolicy: the CRUD use-cases.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::user_service::{MissingUserPolicy, MissingUserPolicyParseError, UserService};
