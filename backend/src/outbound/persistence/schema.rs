//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when the migrations change.

diesel::table! {
    /// User rows served by the CRUD endpoints.
    tb_user (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        username -> Text,
        email -> Text,
    }
}
