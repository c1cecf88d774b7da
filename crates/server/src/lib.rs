//! HTTP endpoint serving the mock portfolio document.
//!
//! - `GET /api/portfolio` - the bundled `PortfolioResponse` as JSON
//! - `GET /health` - liveness check

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use portfolio_viewer_core::errors::CoreError;
use portfolio_viewer_core::models::portfolio::PortfolioResponse;
use portfolio_viewer_core::sources::fixture::mock_portfolio;

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Load from `PORTFOLIO_HOST` / `PORTFOLIO_PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("PORTFOLIO_HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORTFOLIO_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }

    /// # Errors
    /// Returns `AddrParseError` if `host:port` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Shared handler state: the document parsed once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub portfolio: Arc<PortfolioResponse>,
}

impl AppState {
    pub fn new(portfolio: PortfolioResponse) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
        }
    }

    /// State backed by the bundled mock document.
    pub fn mock() -> Result<Self, CoreError> {
        Ok(Self::new(mock_portfolio()?))
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn portfolio(State(state): State<AppState>) -> Json<PortfolioResponse> {
    Json(state.portfolio.as_ref().clone())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/portfolio", get(portfolio))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
