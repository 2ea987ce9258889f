//! Per-test databases on an embedded PostgreSQL cluster.
//!
//! Database creation goes through `postgres` because `CREATE DATABASE` cannot
//! run inside the transaction Diesel wraps migrations in. The schema comes
//! from the same Diesel migrations shipped in `backend/migrations`.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const ADMIN_DATABASE: &str = "postgres";

fn execute(url: &str, sql: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(sql)
        .map_err(|err| format_postgres_error(&err))
}

/// Run all pending Diesel migrations against `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("connect: {err}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err}"))?;
    Ok(())
}

/// Create a uniquely named database with `tb_user` in place, returning its URL.
pub fn create_migrated_database(cluster: &TestCluster) -> Result<String, String> {
    let connection = cluster.connection();
    let name = format!("users_test_{}", Uuid::new_v4().simple());
    execute(
        &connection.database_url(ADMIN_DATABASE),
        &format!("CREATE DATABASE \"{name}\""),
    )?;

    let url = connection.database_url(&name);
    migrate_schema(&url)?;
    Ok(url)
}

/// Drop `tb_user` so subsequent statements fail with a query error.
pub fn drop_user_table(url: &str) -> Result<(), String> {
    execute(url, "DROP TABLE IF EXISTS tb_user;")
}
