use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::portfolio::PortfolioResponse;
use crate::models::settings::ViewerSettings;

use super::traits::PortfolioSource;

/// Fetches the portfolio document over HTTP with a single GET.
///
/// No retry or backoff: a failed fetch is reported to the viewer, which
/// shows an error state with a manual retry action.
pub struct HttpPortfolioSource {
    client: Client,
    url: String,
}

impl HttpPortfolioSource {
    /// `base_url` without trailing slash (e.g., "http://127.0.0.1:3000"),
    /// `endpoint` with leading slash (e.g., "/api/portfolio").
    pub fn new(base_url: &str, endpoint: &str) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            url: format!("{}{}", base_url.trim_end_matches('/'), endpoint),
        }
    }

    /// Source for `settings.portfolio_endpoint` under `base_url`.
    pub fn from_settings(base_url: &str, settings: &ViewerSettings) -> Self {
        Self::new(base_url, &settings.portfolio_endpoint)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioSource for HttpPortfolioSource {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioResponse, CoreError> {
        debug!(url = %self.url, "fetching portfolio");
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                source_name: self.name().to_string(),
                status: status.as_u16(),
                message: "Failed to fetch portfolio data".into(),
            });
        }

        resp.json::<PortfolioResponse>()
            .await
            .map_err(|e| CoreError::Api {
                source_name: self.name().to_string(),
                status: status.as_u16(),
                message: format!("Failed to parse portfolio response: {e}"),
            })
    }
}
