use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::portfolio::PortfolioResponse;

/// Abstraction over where the portfolio document comes from.
///
/// The viewer performs exactly one fetch per load and either receives a
/// complete document or an error; there is no partial result.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    async fn fetch_portfolio(&self) -> Result<PortfolioResponse, CoreError>;
}
