mod config;
mod entities;
mod error;
mod pagination;
mod routes;
mod services;
#[cfg(test)]
mod test_support;
mod validation;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tracing_subscriber::EnvFilter;

use config::Config;
use routes::{create_routes, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.max_connections(config.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(opts).await?;
    tracing::info!("Connected to database");

    Migrator::up(&db, None).await?;
    tracing::info!("Migrations applied");

    let state = AppState::new(db, &config.api_prefix);
    tracing::info!(path = %state.movies_path, "Serving movie catalog");
    let app = create_routes(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
