//! Render-ready view models. The core computes every string, color and
//! opacity; a rendering shell only paints these.

use serde::Serialize;

use super::gain::GainStatusInfo;

/// Responsive layout class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// Classify with the standard thresholds (640px / 1024px).
    #[must_use]
    pub fn from_width(width: u32) -> Self {
        Self::classify(width, 640, 1024)
    }

    #[must_use]
    pub fn classify(width: u32, tablet_min: u32, desktop_min: u32) -> Self {
        if width < tablet_min {
            Breakpoint::Mobile
        } else if width < desktop_min {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Donut geometry for this breakpoint.
    #[must_use]
    pub fn chart_size(self) -> ChartSize {
        match self {
            Breakpoint::Mobile => ChartSize {
                inner_radius: 90,
                outer_radius: 130,
                center_size: 180,
            },
            Breakpoint::Tablet => ChartSize {
                inner_radius: 110,
                outer_radius: 160,
                center_size: 220,
            },
            Breakpoint::Desktop => ChartSize {
                inner_radius: 130,
                outer_radius: 190,
                center_size: 260,
            },
        }
    }
}

/// Donut chart dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSize {
    pub inner_radius: u32,
    pub outer_radius: u32,
    /// Diameter of the clickable center hole overlay
    pub center_size: u32,
}

/// Top-left anchor of the floating tooltip, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TooltipPosition {
    pub x: f64,
    pub y: f64,
}

/// One donut segment, in canonical display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSegment {
    pub index: usize,
    pub ticker_symbol: String,
    /// Segment weight (the holding ratio)
    pub value: f64,
    pub fill: &'static str,
    pub opacity: f64,
}

/// Totals shown inside the donut hole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartCenter {
    /// e.g. "¥115,500"
    pub total_asset_amount: String,
    /// e.g. "+¥8,500"
    pub total_gain_amount: String,
    /// e.g. "+7.94%"
    pub total_gain_ratio: String,
    pub gain_status: GainStatusInfo,
    /// The hole clears focus when clicked, but only while something is focused.
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub size: ChartSize,
    pub segments: Vec<ChartSegment>,
    pub center: ChartCenter,
}

/// How a list row shows the instrument logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LogoDisplay {
    Image(String),
    /// Ticker initials, used after the image failed to load
    Initials(String),
}

/// One holdings list row, in canonical display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetCardView {
    pub index: usize,
    pub ticker_symbol: String,
    pub name: String,
    pub logo: LogoDisplay,
    pub color: &'static str,
    /// e.g. "39.8%"
    pub holding_ratio: String,
    /// e.g. "+¥5,242"
    pub gain_amount: String,
    /// e.g. "+12.87%"
    pub gain_ratio: String,
    pub gain_color_class: &'static str,
    /// Receives the highlight ring
    pub focused: bool,
    /// Rendered at reduced opacity
    pub dimmed: bool,
}

/// Contents of the pointer-following tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipView {
    pub position: TooltipPosition,
    pub name: String,
    pub ticker_symbol: String,
    pub holding_ratio: String,
    /// e.g. "¥45,969"
    pub asset_amount: String,
    /// e.g. "+5,242"
    pub gain_amount: String,
    pub gain_ratio: String,
    pub gain_color_class: &'static str,
}
