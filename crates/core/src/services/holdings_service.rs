use std::collections::HashSet;

use crate::format::{
    format_currency, format_gain_amount_with_symbol, format_gain_ratio, format_holding_ratio,
    gain_status_info, get_gain_status,
};
use crate::interaction::focus::FocusCoordinator;
use crate::models::asset::HoldingAsset;
use crate::models::portfolio::PortfolioResponse;
use crate::models::settings::ViewerSettings;
use crate::models::view::{
    AssetCardView, Breakpoint, ChartCenter, ChartSegment, ChartView, LogoDisplay,
};

/// Holdings ordered by `holding_ratio`, largest first.
///
/// Returns a new vector and leaves `assets` untouched. The sort is stable,
/// so equal ratios keep their input order. A `NaN` ratio sorts last.
#[must_use]
pub fn sort_assets_by_holding_ratio(assets: &[HoldingAsset]) -> Vec<HoldingAsset> {
    let key = |h: &HoldingAsset| {
        if h.holding_ratio.is_nan() {
            f64::NEG_INFINITY
        } else {
            h.holding_ratio
        }
    };
    let mut sorted = assets.to_vec();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    sorted
}

/// Builds the chart and list view models from one sorted holdings sequence.
///
/// Chart segments and list rows are produced from the same slice, which is
/// what keeps a focus index meaning the same holding in both views.
pub struct HoldingsService;

impl HoldingsService {
    pub fn new() -> Self {
        Self
    }

    /// Donut chart model: geometry, segments in display order, and totals.
    pub fn chart_view(
        &self,
        portfolio: &PortfolioResponse,
        sorted: &[HoldingAsset],
        focus: &FocusCoordinator,
        palette: &[&'static str],
        breakpoint: Breakpoint,
        settings: &ViewerSettings,
    ) -> ChartView {
        let segments = sorted
            .iter()
            .enumerate()
            .map(|(index, holding)| ChartSegment {
                index,
                ticker_symbol: holding.asset.ticker_symbol.clone(),
                value: holding.holding_ratio,
                fill: color_at(palette, index),
                opacity: focus.opacity(index, settings.dimmed_opacity),
            })
            .collect();

        let center = ChartCenter {
            total_asset_amount: format!(
                "{}{}",
                settings.currency_symbol,
                format_currency(portfolio.total_asset_amount)
            ),
            total_gain_amount: format_gain_amount_with_symbol(
                portfolio.total_gain_amount,
                &settings.currency_symbol,
            ),
            total_gain_ratio: format_gain_ratio(portfolio.total_gain_ratio),
            gain_status: gain_status_info(portfolio.total_gain_amount),
            clickable: focus.center_clickable(),
        };

        ChartView {
            size: breakpoint.chart_size(),
            segments,
            center,
        }
    }

    /// One card per holding, in display order.
    ///
    /// `failed_logos` holds tickers whose image failed to load; those rows
    /// show ticker initials instead.
    pub fn asset_cards(
        &self,
        sorted: &[HoldingAsset],
        focus: &FocusCoordinator,
        palette: &[&'static str],
        failed_logos: &HashSet<String>,
        settings: &ViewerSettings,
    ) -> Vec<AssetCardView> {
        sorted
            .iter()
            .enumerate()
            .map(|(index, holding)| {
                let asset = &holding.asset;
                let logo = if failed_logos.contains(&asset.ticker_symbol) {
                    LogoDisplay::Initials(asset.initials())
                } else {
                    LogoDisplay::Image(asset.logo_url.clone())
                };
                AssetCardView {
                    index,
                    ticker_symbol: asset.ticker_symbol.clone(),
                    name: asset.name.clone(),
                    logo,
                    color: color_at(palette, index),
                    holding_ratio: format_holding_ratio(holding.holding_ratio),
                    gain_amount: format_gain_amount_with_symbol(
                        holding.gain_amount,
                        &settings.currency_symbol,
                    ),
                    gain_ratio: format_gain_ratio(holding.gain_ratio),
                    gain_color_class: get_gain_status(holding.gain_amount).color_class(),
                    focused: focus.is_highlighted(index),
                    dimmed: focus.is_dimmed(index),
                }
            })
            .collect()
    }
}

impl Default for HoldingsService {
    fn default() -> Self {
        Self::new()
    }
}

fn color_at(palette: &[&'static str], index: usize) -> &'static str {
    if palette.is_empty() {
        return "#6B7280";
    }
    palette[index % palette.len()]
}
