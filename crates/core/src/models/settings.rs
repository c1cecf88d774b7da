use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Display and interaction settings for the viewer.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Symbol placed in front of currency amounts (e.g., "¥", "$").
    pub currency_symbol: String,

    /// Assumed tooltip width in pixels, used for right-edge flipping.
    pub tooltip_width: f64,

    /// Gap between the pointer and the tooltip, in pixels.
    pub tooltip_margin: f64,

    /// Minimum interval between breakpoint recomputations on resize.
    pub resize_throttle_ms: u64,

    /// Viewports narrower than this are `Mobile`.
    pub tablet_min_width: u32,

    /// Viewports at least this wide are `Desktop`.
    pub desktop_min_width: u32,

    /// Delay before the first-run tour starts automatically.
    pub onboarding_delay_ms: u64,

    /// Opacity of chart segments and list rows that are not focused.
    pub dimmed_opacity: f64,

    /// Path of the portfolio endpoint, appended to the source base URL.
    pub portfolio_endpoint: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".to_string(),
            tooltip_width: 200.0,
            tooltip_margin: 15.0,
            resize_throttle_ms: 100,
            tablet_min_width: 640,
            desktop_min_width: 1024,
            onboarding_delay_ms: 500,
            dimmed_opacity: 0.3,
            portfolio_endpoint: "/api/portfolio".to_string(),
        }
    }
}

impl ViewerSettings {
    /// Load settings from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
