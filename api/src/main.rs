use anyhow::Result;
use api::{app, AppState};
use migration::{Migrator, MigratorTrait};
use shared::{get_db_connection, logging, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    info!(
        "Starting crypto market data API v{} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIME")
    );

    let config = Config::from_env()?;
    let db = get_db_connection(&config.database_url).await?;
    info!("Connected to database");

    Migrator::up(&db, None).await?;
    info!("Database schema is up to date");

    let app = app(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(&config.api_bind_addr).await?;
    info!("API server listening on http://{}", config.api_bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping API server");
}
