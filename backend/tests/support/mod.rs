//! Shared helpers for integration suites that need embedded PostgreSQL.

pub mod cluster_skip;
pub mod embedded_postgres;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{create_migrated_database, drop_user_table};
pub use pg_embed::test_cluster;

/// Render a `postgres` error including SQLSTATE, detail and hint.
///
/// `postgres::Error`'s `Display` collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let extras = [
        ("detail", db_error.detail()),
        ("hint", db_error.hint()),
        ("where", db_error.where_()),
    ];
    extras.iter().fold(
        format!("postgres error {:?}: {}", db_error.code(), db_error.message()),
        |mut summary, (label, value)| {
            if let Some(value) = value {
                summary.push_str(&format!("; {label}: {value}"));
            }
            summary
        },
    )
}
