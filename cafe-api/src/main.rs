//! cafe-api: restaurant menu service
//!
//! Long-running HTTP service that:
//! - Creates the `menu_items` table on first start
//! - Serves create/list/get/update/delete for menu items
//! - Optionally allows credentialed CORS for configured origins

use anyhow::Context;
use cafe_api::{AppState, Config, api};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!(
        "Starting cafe-api v{} (database: {})",
        env!("CARGO_PKG_VERSION"),
        config.database_url
    );

    // Initialize application state
    let state = AppState::new(&config)
        .await
        .context("failed to initialize database")?;

    let app = api::create_router(state.clone(), &config);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;
    tracing::info!("cafe-api HTTP listening on {http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    state.close().await;
    tracing::info!("cafe-api stopped");
    Ok(())
}

/// Graceful shutdown handler
///
/// Listens for SIGTERM and Ctrl+C signals
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
