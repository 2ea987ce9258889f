//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed user repository using Diesel
//!
//! Adapters translate between domain types and storage representations.
//! They contain no business logic.

pub mod persistence;
