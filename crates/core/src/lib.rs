pub mod context;
pub mod errors;
pub mod format;
pub mod interaction;
pub mod models;
pub mod services;
pub mod sources;
pub mod storage;

use std::collections::HashSet;

use context::ViewContext;
use interaction::{
    breakpoint::BreakpointTracker,
    focus::{ClickTarget, FocusEffect, FocusState},
    signals::ViewportSignals,
    tooltip::ChartTooltip,
    touch::InputCapabilities,
};
use models::{
    asset::HoldingAsset,
    portfolio::PortfolioResponse,
    settings::ViewerSettings,
    theme::Theme,
    view::{AssetCardView, Breakpoint, ChartView, TooltipView},
};
use services::holdings_service::{sort_assets_by_holding_ratio, HoldingsService};
use sources::traits::PortfolioSource;
use storage::traits::KeyValueStore;
use tracing::{info, warn};

use errors::CoreError;

/// Lifecycle of the one portfolio fetch behind the view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(PortfolioResponse),
    /// The fetch failed; the message is shown next to a manual retry action.
    Failed(String),
}

/// What the host knows about its environment at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostEnvironment {
    /// Current viewport width, if known
    pub viewport_width: Option<u32>,
    /// System `prefers-color-scheme: dark`
    pub prefers_dark: bool,
    pub input: InputCapabilities,
    /// Current time in milliseconds
    pub now_ms: u64,
}

/// Main entry point for the Portfolio Viewer core library.
///
/// Owns the loaded portfolio, its canonical display order and all UI state
/// derived from it. A rendering shell feeds input events in and paints the
/// view models that come out.
#[must_use]
pub struct PortfolioViewer {
    settings: ViewerSettings,
    context: ViewContext,
    store: Box<dyn KeyValueStore>,
    load_state: LoadState,
    /// `holding_assets` sorted by holding ratio; shared by chart and list.
    sorted: Vec<HoldingAsset>,
    tooltip: ChartTooltip,
    breakpoint: BreakpointTracker,
    failed_logos: HashSet<String>,
    holdings_service: HoldingsService,
    mounted: bool,
}

impl std::fmt::Debug for PortfolioViewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioViewer")
            .field("load_state", &self.load_state)
            .field("holdings", &self.sorted.len())
            .field("context", &self.context)
            .field("breakpoint", &self.breakpoint.current())
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl PortfolioViewer {
    /// Viewer with the standard providers (focus and theme).
    pub fn new(settings: ViewerSettings, store: Box<dyn KeyValueStore>) -> Self {
        Self::with_context(settings, store, ViewContext::standard())
    }

    /// Viewer over a caller-assembled context.
    pub fn with_context(
        settings: ViewerSettings,
        store: Box<dyn KeyValueStore>,
        context: ViewContext,
    ) -> Self {
        let tooltip = ChartTooltip::new(&settings);
        let breakpoint = BreakpointTracker::new(None, &settings);
        Self {
            settings,
            context,
            store,
            load_state: LoadState::Loading,
            sorted: Vec::new(),
            tooltip,
            breakpoint,
            failed_logos: HashSet::new(),
            holdings_service: HoldingsService::new(),
            mounted: false,
        }
    }

    // ── Mount / Unmount ─────────────────────────────────────────────

    /// Startup step: hydrate stored preferences, detect touch input and
    /// subscribe to viewport signals. Runs once until `unmount`.
    pub fn mount(
        &mut self,
        signals: &mut ViewportSignals,
        env: HostEnvironment,
    ) -> Result<(), CoreError> {
        if self.mounted {
            return Ok(());
        }
        // All required providers are checked before any state changes.
        self.context.focus()?;
        self.context.theme()?;

        let len = self.sorted.len();
        let focus = self.context.focus_mut()?;
        focus.set_touch_device(env.input.is_touch_device());
        focus.reset(len);
        self.tooltip.clear();

        let theme = self.context.theme_mut()?;
        theme.hydrate(self.store.as_ref(), env.prefers_dark);
        theme.mount(signals);

        if self.context.has_onboarding() {
            self.context
                .onboarding_mut()?
                .hydrate(self.store.as_ref(), env.now_ms);
        }

        self.breakpoint = BreakpointTracker::new(env.viewport_width, &self.settings);
        self.breakpoint.mount(signals);

        self.mounted = true;
        Ok(())
    }

    /// Tear down subscriptions and any running tour.
    pub fn unmount(&mut self, signals: &mut ViewportSignals) -> Result<(), CoreError> {
        if !self.mounted {
            return Ok(());
        }
        self.breakpoint.unmount(signals);
        self.context.theme_mut()?.unmount(signals);
        if self.context.has_onboarding() {
            self.context.onboarding_mut()?.unmount();
        }
        self.mounted = false;
        Ok(())
    }

    /// Timer hook: starts the first-run tour once its delay has passed.
    /// Returns whether the tour started.
    pub fn tick(&mut self, now_ms: u64) -> Result<bool, CoreError> {
        if !self.context.has_onboarding() {
            return Ok(false);
        }
        Ok(self.context.onboarding_mut()?.poll_auto_start(now_ms))
    }

    // ── Data Loading ────────────────────────────────────────────────

    /// Fetch the portfolio once. Also used as the manual retry action.
    ///
    /// On success focus, hover and logo fallbacks start over. On failure
    /// the view shows `LoadState::Failed` and the error is returned.
    pub async fn load(&mut self, source: &dyn PortfolioSource) -> Result<(), CoreError> {
        self.clear_holdings()?;
        self.load_state = LoadState::Loading;
        match source.fetch_portfolio().await {
            Ok(portfolio) => {
                info!(
                    source = source.name(),
                    holdings = portfolio.holding_assets.len(),
                    "portfolio loaded"
                );
                self.apply_portfolio(portfolio)
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "portfolio load failed");
                self.load_state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Install an already-fetched portfolio.
    pub fn apply_portfolio(&mut self, portfolio: PortfolioResponse) -> Result<(), CoreError> {
        self.sorted = sort_assets_by_holding_ratio(&portfolio.holding_assets);
        self.context.focus_mut()?.reset(self.sorted.len());
        self.tooltip.clear();
        self.failed_logos.clear();
        self.load_state = LoadState::Loaded(portfolio);
        Ok(())
    }

    /// Drop the displayed holdings along with focus, hover and logo state.
    fn clear_holdings(&mut self) -> Result<(), CoreError> {
        self.sorted.clear();
        self.context.focus_mut()?.reset(0);
        self.tooltip.clear();
        self.failed_logos.clear();
        Ok(())
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn portfolio(&self) -> Option<&PortfolioResponse> {
        match &self.load_state {
            LoadState::Loaded(portfolio) => Some(portfolio),
            _ => None,
        }
    }

    /// Holdings in display order.
    pub fn sorted_holdings(&self) -> &[HoldingAsset] {
        &self.sorted
    }

    // ── Focus ───────────────────────────────────────────────────────

    /// Deliver a click. Returns the side effect the host must perform, if any.
    pub fn click(&mut self, target: ClickTarget) -> Result<Option<FocusEffect>, CoreError> {
        Ok(self.context.focus_mut()?.dispatch(target))
    }

    pub fn focus_state(&self) -> Result<FocusState, CoreError> {
        Ok(self.context.focus()?.state())
    }

    // ── Tooltip ─────────────────────────────────────────────────────

    /// Pointer entered segment `index` (display order).
    pub fn pointer_enter_segment(&mut self, index: usize) {
        if let Some(holding) = self.sorted.get(index) {
            self.tooltip.on_segment_enter(holding);
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, viewport_width: f64) {
        self.tooltip.on_pointer_move(x, y, viewport_width);
    }

    pub fn pointer_leave_chart(&mut self) {
        self.tooltip.on_chart_leave();
    }

    // ── Logos ───────────────────────────────────────────────────────

    /// A logo image failed to load. The row falls back to initials for the
    /// rest of this load; the image is not retried.
    pub fn report_logo_error(&mut self, ticker_symbol: &str) {
        self.failed_logos.insert(ticker_symbol.to_string());
    }

    // ── Theme ───────────────────────────────────────────────────────

    pub fn theme(&self) -> Result<Theme, CoreError> {
        Ok(self.context.theme()?.theme())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), CoreError> {
        self.context.theme_mut()?.set_theme(theme, self.store.as_mut())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, CoreError> {
        self.context.theme_mut()?.toggle_theme(self.store.as_mut())
    }

    // ── Onboarding ──────────────────────────────────────────────────

    /// Start the tour on demand (e.g., from a help button).
    pub fn start_tour(&mut self) -> Result<(), CoreError> {
        self.context.onboarding_mut()?.start_tour();
        Ok(())
    }

    /// The tour overlay closed.
    pub fn on_tour_destroyed(&mut self) -> Result<(), CoreError> {
        self.context
            .onboarding_mut()?
            .on_tour_destroyed(self.store.as_mut())
    }

    pub fn context(&self) -> &ViewContext {
        &self.context
    }

    // ── View Models ─────────────────────────────────────────────────

    #[must_use]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint.current()
    }

    /// Donut chart model, `None` unless a portfolio is loaded.
    pub fn chart_view(&self) -> Result<Option<ChartView>, CoreError> {
        let Some(portfolio) = self.portfolio() else {
            return Ok(None);
        };
        let palette = self.context.theme()?.chart_palette();
        Ok(Some(self.holdings_service.chart_view(
            portfolio,
            &self.sorted,
            self.context.focus()?,
            palette,
            self.breakpoint.current(),
            &self.settings,
        )))
    }

    /// Holdings list model, `None` unless a portfolio is loaded.
    pub fn asset_cards(&self) -> Result<Option<Vec<AssetCardView>>, CoreError> {
        if self.portfolio().is_none() {
            return Ok(None);
        }
        let palette = self.context.theme()?.chart_palette();
        Ok(Some(self.holdings_service.asset_cards(
            &self.sorted,
            self.context.focus()?,
            palette,
            &self.failed_logos,
            &self.settings,
        )))
    }

    /// Floating tooltip model, `None` while nothing is hovered or no
    /// portfolio is loaded.
    #[must_use]
    pub fn tooltip_view(&self) -> Option<TooltipView> {
        self.portfolio()?;
        self.tooltip.view(&self.settings.currency_symbol)
    }

    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }
}
