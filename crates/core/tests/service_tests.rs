// ═══════════════════════════════════════════════════════════════════
// Service Tests: holdings sort & view models, ThemeStore,
// OnboardingService, preference stores
// ═══════════════════════════════════════════════════════════════════

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use portfolio_viewer_core::errors::CoreError;
use portfolio_viewer_core::interaction::focus::FocusCoordinator;
use portfolio_viewer_core::interaction::signals::{ViewportEvent, ViewportSignals};
use portfolio_viewer_core::models::asset::{Asset, HoldingAsset};
use portfolio_viewer_core::models::gain::GainStatus;
use portfolio_viewer_core::models::portfolio::PortfolioResponse;
use portfolio_viewer_core::models::settings::ViewerSettings;
use portfolio_viewer_core::models::theme::{Theme, CHART_COLORS_DARK, CHART_COLORS_LIGHT};
use portfolio_viewer_core::models::view::{Breakpoint, LogoDisplay};
use portfolio_viewer_core::services::holdings_service::{
    sort_assets_by_holding_ratio, HoldingsService,
};
use portfolio_viewer_core::services::onboarding_service::{
    onboarding_steps, OnboardingService, PopoverAlign, TourConfig, TourDriver, TourStep,
    ONBOARDING_COMPLETED_KEY,
};
use portfolio_viewer_core::services::theme_service::ThemeStore;
use portfolio_viewer_core::sources::fixture::mock_portfolio;
use portfolio_viewer_core::storage::file_store::FileStore;
use portfolio_viewer_core::storage::memory::MemoryStore;
use portfolio_viewer_core::storage::traits::KeyValueStore;
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════

fn holding(ticker: &str, holding_ratio: f64) -> HoldingAsset {
    HoldingAsset::new(
        Asset::new(format!("{ticker} Corp."), ticker, format!("https://logo.example/{ticker}")),
        1_000.0,
        0.0,
        0.0,
        holding_ratio,
    )
}

fn tickers(holdings: &[HoldingAsset]) -> Vec<&str> {
    holdings.iter().map(|h| h.asset.ticker_symbol.as_str()).collect()
}

/// Records every driver call so tests can assert on the tour lifecycle.
#[derive(Clone, Default)]
struct RecordingDriver {
    calls: Rc<RefCell<Vec<String>>>,
}

impl TourDriver for RecordingDriver {
    fn drive(&mut self, steps: &[TourStep], config: &TourConfig) {
        self.calls
            .borrow_mut()
            .push(format!("drive:{}:{}", steps.len(), config.done_label));
    }

    fn destroy(&mut self) {
        self.calls.borrow_mut().push("destroy".to_string());
    }
}

/// A store that can be read but refuses every write.
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.0.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::FileIO("storage quota exceeded".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), CoreError> {
        Err(CoreError::FileIO("storage quota exceeded".into()))
    }
}

// ═══════════════════════════════════════════════════════════════════
// sort_assets_by_holding_ratio
// ═══════════════════════════════════════════════════════════════════

mod sorting {
    use super::*;

    #[test]
    fn orders_by_ratio_descending() {
        let input = vec![holding("MSFT", 19.7), holding("VOO", 39.8), holding("AAPL", 24.7)];
        let sorted = sort_assets_by_holding_ratio(&input);
        assert_eq!(tickers(&sorted), vec!["VOO", "AAPL", "MSFT"]);
    }

    #[test]
    fn mock_portfolio_display_order() {
        let p = mock_portfolio().unwrap();
        let sorted = sort_assets_by_holding_ratio(&p.holding_assets);
        assert_eq!(tickers(&sorted), vec!["VOO", "AAPL", "MSFT", "TSLA", "GOOGL"]);
    }

    #[test]
    fn does_not_mutate_input() {
        let input = vec![holding("MSFT", 19.7), holding("VOO", 39.8), holding("AAPL", 24.7)];
        let before = input.clone();
        let _ = sort_assets_by_holding_ratio(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn ties_keep_input_order() {
        let input = vec![
            holding("A", 10.0),
            holding("B", 30.0),
            holding("C", 10.0),
            holding("D", 30.0),
        ];
        let sorted = sort_assets_by_holding_ratio(&input);
        assert_eq!(tickers(&sorted), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn nan_sorts_last() {
        let input = vec![holding("N", f64::NAN), holding("A", 1.0), holding("B", 2.0)];
        let sorted = sort_assets_by_holding_ratio(&input);
        assert_eq!(tickers(&sorted), vec!["B", "A", "N"]);
    }

    #[test]
    fn empty_and_single() {
        assert!(sort_assets_by_holding_ratio(&[]).is_empty());
        let one = vec![holding("X", 100.0)];
        assert_eq!(sort_assets_by_holding_ratio(&one), one);
    }
}

proptest! {
    #[test]
    fn sort_is_idempotent(ratios in proptest::collection::vec(0.0f64..100.0, 0..20)) {
        let input: Vec<HoldingAsset> = ratios
            .iter()
            .enumerate()
            .map(|(i, r)| holding(&format!("T{i}"), *r))
            .collect();
        let once = sort_assets_by_holding_ratio(&input);
        let twice = sort_assets_by_holding_ratio(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.windows(2).all(|w| w[0].holding_ratio >= w[1].holding_ratio));
        prop_assert_eq!(once.len(), input.len());
    }
}

// ═══════════════════════════════════════════════════════════════════
// HoldingsService view models
// ═══════════════════════════════════════════════════════════════════

mod holdings_views {
    use super::*;

    fn fixture() -> (PortfolioResponse, Vec<HoldingAsset>) {
        let p = mock_portfolio().unwrap();
        let sorted = sort_assets_by_holding_ratio(&p.holding_assets);
        (p, sorted)
    }

    #[test]
    fn chart_center_totals() {
        let (p, sorted) = fixture();
        let focus = FocusCoordinator::new(sorted.len());
        let view = HoldingsService::new().chart_view(
            &p,
            &sorted,
            &focus,
            &CHART_COLORS_LIGHT,
            Breakpoint::Desktop,
            &ViewerSettings::default(),
        );

        assert_eq!(view.center.total_asset_amount, "¥115,500");
        assert_eq!(view.center.total_gain_amount, "+¥8,500");
        assert_eq!(view.center.total_gain_ratio, "+7.94%");
        assert_eq!(view.center.gain_status.status, GainStatus::Positive);
        assert_eq!(view.center.gain_status.accent_color, "#22C55E");
        assert!(!view.center.clickable);
        assert_eq!(view.size, Breakpoint::Desktop.chart_size());
    }

    #[test]
    fn segments_follow_display_order_and_palette() {
        let (p, sorted) = fixture();
        let focus = FocusCoordinator::new(sorted.len());
        let view = HoldingsService::new().chart_view(
            &p,
            &sorted,
            &focus,
            &CHART_COLORS_LIGHT,
            Breakpoint::Mobile,
            &ViewerSettings::default(),
        );

        assert_eq!(view.segments.len(), 5);
        for (i, segment) in view.segments.iter().enumerate() {
            assert_eq!(segment.index, i);
            assert_eq!(segment.ticker_symbol, sorted[i].asset.ticker_symbol);
            assert_eq!(segment.fill, CHART_COLORS_LIGHT[i]);
            assert_eq!(segment.opacity, 1.0);
        }
        assert_eq!(view.segments[0].value, 39.8);
        assert_eq!(view.size.outer_radius, 130);
    }

    #[test]
    fn focus_dims_other_segments() {
        let (p, sorted) = fixture();
        let mut focus = FocusCoordinator::new(sorted.len());
        focus.click(1);
        let view = HoldingsService::new().chart_view(
            &p,
            &sorted,
            &focus,
            &CHART_COLORS_DARK,
            Breakpoint::Tablet,
            &ViewerSettings::default(),
        );

        assert_eq!(view.segments[1].opacity, 1.0);
        assert_eq!(view.segments[0].opacity, 0.3);
        assert_eq!(view.segments[4].opacity, 0.3);
        assert_eq!(view.segments[0].fill, CHART_COLORS_DARK[0]);
        assert!(view.center.clickable);
    }

    #[test]
    fn cards_format_every_row() {
        let (_, sorted) = fixture();
        let focus = FocusCoordinator::new(sorted.len());
        let cards = HoldingsService::new().asset_cards(
            &sorted,
            &focus,
            &CHART_COLORS_LIGHT,
            &HashSet::new(),
            &ViewerSettings::default(),
        );

        let voo = &cards[0];
        assert_eq!(voo.ticker_symbol, "VOO");
        assert_eq!(voo.holding_ratio, "39.8%");
        assert_eq!(voo.gain_amount, "+¥5,242");
        assert_eq!(voo.gain_ratio, "+12.87%");
        assert_eq!(voo.gain_color_class, "text-green-600 dark:text-green-300");
        assert_eq!(
            voo.logo,
            LogoDisplay::Image("https://logo.clearbit.com/vanguard.com".into())
        );

        let msft = &cards[2];
        assert_eq!(msft.ticker_symbol, "MSFT");
        assert_eq!(msft.gain_amount, "¥0");
        assert_eq!(msft.gain_ratio, "0.00%");
        assert_eq!(msft.gain_color_class, "text-gray-500 dark:text-gray-400");

        let tsla = &cards[3];
        assert_eq!(tsla.gain_amount, "-¥1,520");
        assert_eq!(tsla.gain_ratio, "-15.38%");
        assert_eq!(tsla.gain_color_class, "text-red-600 dark:text-red-400");

        assert!(cards.iter().all(|c| !c.focused && !c.dimmed));
    }

    #[test]
    fn cards_reflect_focus() {
        let (_, sorted) = fixture();
        let mut focus = FocusCoordinator::new(sorted.len());
        focus.click(0);
        let cards = HoldingsService::new().asset_cards(
            &sorted,
            &focus,
            &CHART_COLORS_LIGHT,
            &HashSet::new(),
            &ViewerSettings::default(),
        );
        assert!(cards[0].focused && !cards[0].dimmed);
        assert!(cards[1..].iter().all(|c| !c.focused && c.dimmed));
    }

    #[test]
    fn failed_logo_falls_back_to_initials() {
        let (_, sorted) = fixture();
        let focus = FocusCoordinator::new(sorted.len());
        let failed: HashSet<String> = ["TSLA".to_string()].into_iter().collect();
        let cards = HoldingsService::new().asset_cards(
            &sorted,
            &focus,
            &CHART_COLORS_LIGHT,
            &failed,
            &ViewerSettings::default(),
        );
        assert_eq!(cards[3].logo, LogoDisplay::Initials("TS".into()));
        assert!(matches!(cards[0].logo, LogoDisplay::Image(_)));
    }

    #[test]
    fn palette_wraps_around() {
        let sorted: Vec<HoldingAsset> = (0..10)
            .map(|i| holding(&format!("T{i}"), 100.0 - i as f64))
            .collect();
        let focus = FocusCoordinator::new(sorted.len());
        let cards = HoldingsService::new().asset_cards(
            &sorted,
            &focus,
            &CHART_COLORS_LIGHT,
            &HashSet::new(),
            &ViewerSettings::default(),
        );
        assert_eq!(cards[8].color, CHART_COLORS_LIGHT[0]);
        assert_eq!(cards[9].color, CHART_COLORS_LIGHT[1]);
    }

    #[test]
    fn empty_palette_uses_neutral_color() {
        let sorted = vec![holding("A", 50.0)];
        let focus = FocusCoordinator::new(1);
        let cards = HoldingsService::new().asset_cards(
            &sorted,
            &focus,
            &[],
            &HashSet::new(),
            &ViewerSettings::default(),
        );
        assert_eq!(cards[0].color, "#6B7280");
    }

    #[test]
    fn custom_currency_symbol() {
        let (p, sorted) = fixture();
        let settings = ViewerSettings {
            currency_symbol: "$".into(),
            ..ViewerSettings::default()
        };
        let focus = FocusCoordinator::new(sorted.len());
        let view = HoldingsService::new().chart_view(
            &p,
            &sorted,
            &focus,
            &CHART_COLORS_LIGHT,
            Breakpoint::Desktop,
            &settings,
        );
        assert_eq!(view.center.total_asset_amount, "$115,500");
        assert_eq!(view.center.total_gain_amount, "+$8,500");
    }
}

// ═══════════════════════════════════════════════════════════════════
// ThemeStore
// ═══════════════════════════════════════════════════════════════════

mod theme_store {
    use super::*;

    #[test]
    fn light_placeholder_before_hydration() {
        let theme = ThemeStore::new();
        assert_eq!(theme.theme(), Theme::Light);
        assert!(!theme.is_hydrated());
        assert!(!theme.is_dark_mode());
    }

    #[test]
    fn falls_back_to_system_preference() {
        let mut theme = ThemeStore::new();
        assert_eq!(theme.hydrate(&MemoryStore::new(), true), Theme::Dark);
        assert!(theme.is_hydrated());
        assert!(theme.is_dark_mode());
    }

    #[test]
    fn stored_preference_wins() {
        let store = MemoryStore::with_entries([("theme", "dark")]);
        let mut theme = ThemeStore::new();
        assert_eq!(theme.hydrate(&store, false), Theme::Dark);
    }

    #[test]
    fn invalid_stored_value_is_ignored() {
        let store = MemoryStore::with_entries([("theme", "purple")]);
        let mut theme = ThemeStore::new();
        assert_eq!(theme.hydrate(&store, false), Theme::Light);

        // Not an explicit choice, so the system signal still applies.
        theme.on_system_scheme_changed(true);
        assert_eq!(theme.theme(), Theme::Dark);
    }

    #[test]
    fn hydrates_only_once() {
        let mut theme = ThemeStore::new();
        theme.hydrate(&MemoryStore::new(), false);
        let store = MemoryStore::with_entries([("theme", "dark")]);
        assert_eq!(theme.hydrate(&store, true), Theme::Light);
    }

    #[test]
    fn set_theme_persists() {
        let mut store = MemoryStore::new();
        let mut theme = ThemeStore::new();
        theme.hydrate(&store, false);
        theme.set_theme(Theme::Dark, &mut store).unwrap();
        assert_eq!(theme.theme(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = MemoryStore::new();
        let mut theme = ThemeStore::new();
        theme.hydrate(&store, false);
        assert_eq!(theme.toggle_theme(&mut store).unwrap(), Theme::Dark);
        assert_eq!(theme.toggle_theme(&mut store).unwrap(), Theme::Light);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn failed_write_still_applies_in_memory() {
        let mut store = ReadOnlyStore(MemoryStore::new());
        let mut theme = ThemeStore::new();
        theme.hydrate(&store, false);
        let err = theme.set_theme(Theme::Dark, &mut store).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
        assert_eq!(theme.theme(), Theme::Dark);
    }

    #[test]
    fn explicit_choice_ignores_system_changes() {
        let mut store = MemoryStore::new();
        let mut theme = ThemeStore::new();
        theme.hydrate(&store, false);
        theme.set_theme(Theme::Light, &mut store).unwrap();
        theme.on_system_scheme_changed(true);
        assert_eq!(theme.theme(), Theme::Light);
    }

    #[test]
    fn system_change_before_hydration_is_ignored() {
        let mut theme = ThemeStore::new();
        theme.on_system_scheme_changed(true);
        assert_eq!(theme.theme(), Theme::Light);
        assert!(!theme.is_hydrated());
    }

    #[test]
    fn mounted_store_follows_signals() {
        let mut signals = ViewportSignals::new();
        let mut theme = ThemeStore::new();
        theme.hydrate(&MemoryStore::new(), false);
        theme.mount(&mut signals);
        theme.mount(&mut signals);
        assert_eq!(signals.listener_count(), 1);

        signals.emit(ViewportEvent::ColorSchemeChanged { prefers_dark: true });
        assert_eq!(theme.theme(), Theme::Dark);
        assert_eq!(theme.chart_palette(), &CHART_COLORS_DARK);

        theme.unmount(&mut signals);
        signals.emit(ViewportEvent::ColorSchemeChanged { prefers_dark: false });
        assert_eq!(theme.theme(), Theme::Dark);
    }

    #[test]
    fn instances_are_isolated() {
        let mut store = MemoryStore::new();
        let mut a = ThemeStore::new();
        let mut b = ThemeStore::new();
        a.hydrate(&store, false);
        b.hydrate(&store, false);
        a.set_theme(Theme::Dark, &mut store).unwrap();
        assert_eq!(b.theme(), Theme::Light);
    }
}

// ═══════════════════════════════════════════════════════════════════
// OnboardingService
// ═══════════════════════════════════════════════════════════════════

mod onboarding {
    use super::*;

    fn service(delay_ms: u64) -> (OnboardingService, Rc<RefCell<Vec<String>>>) {
        let driver = RecordingDriver::default();
        let calls = Rc::clone(&driver.calls);
        (OnboardingService::new(Box::new(driver), delay_ms), calls)
    }

    #[test]
    fn five_steps_in_order() {
        let steps = onboarding_steps();
        let elements: Vec<&str> = steps.iter().map(|s| s.element).collect();
        assert_eq!(
            elements,
            vec![
                "[data-driver=\"portfolio-chart\"]",
                "[data-driver=\"chart-center\"]",
                "[data-driver=\"asset-list\"]",
                "[data-driver=\"portfolio-chart\"]",
                "[data-driver=\"theme-toggle\"]",
            ]
        );
        assert_eq!(steps[4].align, PopoverAlign::End);
    }

    #[test]
    fn tour_config_defaults() {
        let config = TourConfig::default();
        assert!(config.show_progress);
        assert_eq!(config.progress_text, "{{current}} / {{total}}");
        assert_eq!(config.next_label, "Next");
        assert_eq!(config.previous_label, "Back");
        assert_eq!(config.done_label, "Done");
        assert_eq!(config.stage_padding, 10);
        assert_eq!(config.stage_radius, 8);
    }

    #[test]
    fn first_visit_auto_starts_after_delay() {
        let (mut svc, calls) = service(500);
        assert!(!svc.poll_auto_start(10_000));

        svc.hydrate(&MemoryStore::new(), 1_000);
        assert!(svc.is_hydrated());
        assert!(svc.should_auto_start());

        assert!(!svc.poll_auto_start(1_499));
        assert!(svc.poll_auto_start(1_500));
        assert!(svc.is_active());
        assert_eq!(*calls.borrow(), vec!["drive:5:Done"]);

        // Only once.
        assert!(!svc.poll_auto_start(5_000));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn delay_comes_from_settings() {
        let driver = RecordingDriver::default();
        let calls = Rc::clone(&driver.calls);
        let settings = ViewerSettings {
            onboarding_delay_ms: 1_200,
            ..ViewerSettings::default()
        };
        let mut svc = OnboardingService::from_settings(Box::new(driver), &settings);
        svc.hydrate(&MemoryStore::new(), 1_000);

        assert!(!svc.poll_auto_start(1_500));
        assert!(!svc.poll_auto_start(2_199));
        assert!(svc.poll_auto_start(2_200));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn completed_visitor_is_not_toured() {
        let (mut svc, calls) = service(500);
        svc.hydrate(&MemoryStore::with_entries([(ONBOARDING_COMPLETED_KEY, "true")]), 0);
        assert!(svc.is_completed());
        assert!(!svc.should_auto_start());
        assert!(!svc.poll_auto_start(10_000));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn only_literal_true_counts_as_completed() {
        let (mut svc, _) = service(0);
        svc.hydrate(&MemoryStore::with_entries([(ONBOARDING_COMPLETED_KEY, "yes")]), 0);
        assert!(!svc.is_completed());
        assert!(svc.should_auto_start());
    }

    #[test]
    fn destroy_persists_completion() {
        let (mut svc, _) = service(0);
        let mut store = MemoryStore::new();
        svc.hydrate(&store, 0);
        svc.poll_auto_start(0);

        svc.on_tour_destroyed(&mut store).unwrap();
        assert!(!svc.is_active());
        assert!(svc.is_completed());
        assert_eq!(
            store.get(ONBOARDING_COMPLETED_KEY).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn manual_restart_tears_down_running_tour() {
        let (mut svc, calls) = service(0);
        svc.hydrate(&MemoryStore::with_entries([(ONBOARDING_COMPLETED_KEY, "true")]), 0);
        svc.start_tour();
        svc.start_tour();
        assert_eq!(
            *calls.borrow(),
            vec!["drive:5:Done", "destroy", "drive:5:Done"]
        );
        assert!(svc.is_active());
        assert!(svc.is_completed());
    }

    #[test]
    fn manual_start_cancels_scheduled_auto_start() {
        let (mut svc, calls) = service(500);
        svc.hydrate(&MemoryStore::new(), 0);
        svc.start_tour();
        assert!(!svc.poll_auto_start(1_000));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn unmount_destroys_active_tour() {
        let (mut svc, calls) = service(0);
        svc.hydrate(&MemoryStore::new(), 0);
        svc.poll_auto_start(0);
        svc.unmount();
        assert!(!svc.is_active());
        assert_eq!(calls.borrow().last().map(String::as_str), Some("destroy"));
    }

    #[test]
    fn unmount_cancels_pending_auto_start() {
        let (mut svc, calls) = service(500);
        svc.hydrate(&MemoryStore::new(), 0);
        svc.unmount();
        assert!(!svc.poll_auto_start(1_000));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        let (mut svc, _) = service(0);
        let mut store = ReadOnlyStore(MemoryStore::new());
        svc.hydrate(&store, 0);
        svc.start_tour();
        assert!(svc.on_tour_destroyed(&mut store).is_err());
        assert!(!svc.is_active());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Preference stores
// ═══════════════════════════════════════════════════════════════════

mod stores {
    use super::*;

    #[test]
    fn memory_store_crud() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

        store.remove("theme").unwrap();
        store.remove("missing").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.set(ONBOARDING_COMPLETED_KEY, "true").unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(
            reopened.get(ONBOARDING_COMPLETED_KEY).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn file_store_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.remove("theme").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap(), None);
    }

    #[test]
    fn file_store_empty_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "  \n").unwrap();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn file_store_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ broken").unwrap();
        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn theme_round_trips_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        let mut theme = ThemeStore::new();
        theme.hydrate(&store, false);
        theme.set_theme(Theme::Dark, &mut store).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        let mut next_session = ThemeStore::new();
        assert_eq!(next_session.hydrate(&reopened, false), Theme::Dark);
    }
}
