use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::asset::HoldingAsset;

/// The portfolio document handed over by a data source.
///
/// `holding_assets` arrives in arbitrary order. Display order is derived
/// by sorting, never by mutating this list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResponse {
    /// Sum of all `asset_amount` values (integer currency units, >= 0)
    pub total_asset_amount: f64,

    /// Sum of all `gain_amount` values (integer currency units, signed)
    pub total_gain_amount: f64,

    /// Overall profit/loss in percent (signed)
    pub total_gain_ratio: f64,

    /// All positions, input order not guaranteed
    pub holding_assets: Vec<HoldingAsset>,
}

impl PortfolioResponse {
    /// Parse a portfolio document from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holding_assets.is_empty()
    }
}
