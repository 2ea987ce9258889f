//! Users service entry-point: loads settings, builds the connection pool and
//! serves the CRUD endpoints.

mod server;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServiceSettings, create_server};
use users_api::outbound::persistence::DbPool;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let policy = settings.missing_user_policy()?;
    let pool = DbPool::new(settings.pool_config()?)
        .await
        .wrap_err("failed to build database connection pool")?;

    let config = ServerConfig::new(bind_addr, pool).with_missing_user_policy(policy);
    let server = create_server(config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    server.await.wrap_err("server terminated with an error")
}
