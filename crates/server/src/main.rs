//! Portfolio Viewer mock API server.

use tracing::info;

use portfolio_viewer_server::{create_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_viewer_server=info,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let addr = config.socket_addr()?;
    let state = AppState::mock()?;
    info!(holdings = state.portfolio.holding_assets.len(), "mock portfolio loaded");

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Portfolio API listening on http://{addr}/api/portfolio");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
