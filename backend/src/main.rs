//! Event API entry-point: loads settings, prepares storage, and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use event_api::inbound::http::health::HealthState;
use event_api::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, build_services, create_server, seed_admin};

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

    let settings =
        ServerSettings::load().map_err(|err| eyre!("failed to load server settings: {err}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err_with(|| format!("invalid bind host {}", settings.bind_host()))?;
    let mut config = ServerConfig::new(bind_addr);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            run_pending_migrations(database_url)
                .await
                .wrap_err("failed to apply database migrations")?;
        }
        let pool_config =
            PoolConfig::new(database_url).with_max_size(settings.database_max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::make_metrics());

    let services = build_services(config.db_pool());
    if let Some((email, password)) = settings.admin_credentials() {
        seed_admin(services.accounts.as_ref(), email, password)
            .await
            .map_err(|err| eyre!("failed to seed administrator account: {err}"))?;
    }

    info!(bind_addr = %config.bind_addr(), "starting event API");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, &services)?;
    server.await?;
    Ok(())
}
