use tracing::debug;

use crate::format::{
    format_currency, format_gain_amount, format_gain_ratio, format_holding_ratio, get_gain_status,
};
use crate::models::asset::HoldingAsset;
use crate::models::settings::ViewerSettings;
use crate::models::view::{TooltipPosition, TooltipView};

/// Anchor the tooltip `margin` pixels down-right of the pointer, flipping to
/// the left side when it would overflow the right edge of the viewport.
#[must_use]
pub fn compute_tooltip_position(
    pointer_x: f64,
    pointer_y: f64,
    viewport_width: f64,
    tooltip_width: f64,
    margin: f64,
) -> TooltipPosition {
    let mut x = pointer_x + margin;
    let y = pointer_y + margin;
    if x + tooltip_width > viewport_width {
        x = pointer_x - tooltip_width - margin;
    }
    TooltipPosition { x, y }
}

/// Hover and position state of the chart's floating tooltip.
///
/// Hover is independent of click focus. The last position survives the
/// pointer leaving the chart, so re-entering shows the tooltip where it was
/// until the next move event arrives.
#[derive(Debug, Clone)]
pub struct ChartTooltip {
    position: TooltipPosition,
    hovered: Option<HoldingAsset>,
    tooltip_width: f64,
    margin: f64,
}

impl ChartTooltip {
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            position: TooltipPosition::default(),
            hovered: None,
            tooltip_width: settings.tooltip_width,
            margin: settings.tooltip_margin,
        }
    }

    /// Pointer entered a segment. Stores a copy of the holding.
    pub fn on_segment_enter(&mut self, holding: &HoldingAsset) {
        debug!(ticker = %holding.asset.ticker_symbol, "tooltip hover");
        self.hovered = Some(holding.clone());
    }

    pub fn on_pointer_move(&mut self, pointer_x: f64, pointer_y: f64, viewport_width: f64) {
        self.position = compute_tooltip_position(
            pointer_x,
            pointer_y,
            viewport_width,
            self.tooltip_width,
            self.margin,
        );
    }

    /// Pointer left the chart (or a segment). Position is kept.
    pub fn on_chart_leave(&mut self) {
        self.hovered = None;
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn position(&self) -> TooltipPosition {
        self.position
    }

    pub fn hovered(&self) -> Option<&HoldingAsset> {
        self.hovered.as_ref()
    }

    /// Render model, `None` while nothing is hovered.
    #[must_use]
    pub fn view(&self, currency_symbol: &str) -> Option<TooltipView> {
        let holding = self.hovered.as_ref()?;
        Some(TooltipView {
            position: self.position,
            name: holding.asset.name.clone(),
            ticker_symbol: holding.asset.ticker_symbol.clone(),
            holding_ratio: format_holding_ratio(holding.holding_ratio),
            asset_amount: format!("{currency_symbol}{}", format_currency(holding.asset_amount)),
            gain_amount: format_gain_amount(holding.gain_amount),
            gain_ratio: format_gain_ratio(holding.gain_ratio),
            gain_color_class: get_gain_status(holding.gain_amount).color_class(),
        })
    }
}
