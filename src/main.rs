//! Server binary: reads config, opens the store, ensures the schema, serves until Ctrl-C, closes the store.

use bakery_api::{app, seed_demo_data, AppConfig, AppState, Store};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bakery_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = Store::connect(&config.database_url, config.max_connections).await?;
    store.ensure_tables().await?;
    if config.seed_demo_data {
        seed_demo_data(&store).await?;
    }

    let router = app(AppState::new(store.clone()), config.max_body_bytes);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
