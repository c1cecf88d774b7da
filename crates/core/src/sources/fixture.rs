use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::portfolio::PortfolioResponse;

use super::traits::PortfolioSource;

/// The bundled mock portfolio document, as served by `/api/portfolio`.
pub const MOCK_PORTFOLIO_JSON: &str = include_str!("mock_portfolio.json");

/// Parse the bundled mock document.
pub fn mock_portfolio() -> Result<PortfolioResponse, CoreError> {
    PortfolioResponse::from_json(MOCK_PORTFOLIO_JSON)
}

/// Serves a fixed document without any I/O.
pub struct StaticPortfolioSource {
    response: PortfolioResponse,
}

impl StaticPortfolioSource {
    pub fn new(response: PortfolioResponse) -> Self {
        Self { response }
    }

    /// Source backed by the bundled mock document.
    pub fn mock() -> Result<Self, CoreError> {
        Ok(Self::new(mock_portfolio()?))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioSource for StaticPortfolioSource {
    fn name(&self) -> &str {
        "Static"
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioResponse, CoreError> {
        Ok(self.response.clone())
    }
}
