use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::hydration::Hydration;
use crate::models::settings::ViewerSettings;
use crate::storage::traits::KeyValueStore;

/// Storage key holding `"true"` once the tour was finished or dismissed.
pub const ONBOARDING_COMPLETED_KEY: &str = "onboarding-completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverSide {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverAlign {
    Start,
    Center,
    End,
}

/// One highlighted element of the guided tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourStep {
    /// Selector of the element to highlight
    pub element: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub side: PopoverSide,
    pub align: PopoverAlign,
}

/// The first-run tour, in presentation order.
#[must_use]
pub fn onboarding_steps() -> Vec<TourStep> {
    vec![
        TourStep {
            element: "[data-driver=\"portfolio-chart\"]",
            title: "Portfolio chart",
            description: "Your portfolio composition as a donut chart. Each segment is one holding.",
            side: PopoverSide::Bottom,
            align: PopoverAlign::Center,
        },
        TourStep {
            element: "[data-driver=\"chart-center\"]",
            title: "Total assets and gain",
            description: "The center shows total assets and unrealized gain. Green is a gain, red is a loss.",
            side: PopoverSide::Bottom,
            align: PopoverAlign::Center,
        },
        TourStep {
            element: "[data-driver=\"asset-list\"]",
            title: "Holdings",
            description: "Details for every holding: logo, name, holding ratio and gain.",
            side: PopoverSide::Top,
            align: PopoverAlign::Center,
        },
        TourStep {
            element: "[data-driver=\"portfolio-chart\"]",
            title: "Focus",
            description: "Click a segment to focus on that holding.",
            side: PopoverSide::Bottom,
            align: PopoverAlign::Center,
        },
        TourStep {
            element: "[data-driver=\"theme-toggle\"]",
            title: "Theme",
            description: "Switch between light and dark mode here.",
            side: PopoverSide::Bottom,
            align: PopoverAlign::End,
        },
    ]
}

/// Presentation options handed to the tour driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    pub show_progress: bool,
    /// `{{current}}` and `{{total}}` are substituted by the driver
    pub progress_text: &'static str,
    pub next_label: &'static str,
    pub previous_label: &'static str,
    pub done_label: &'static str,
    /// Padding around the highlighted cut-out, in pixels
    pub stage_padding: u32,
    pub stage_radius: u32,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            progress_text: "{{current}} / {{total}}",
            next_label: "Next",
            previous_label: "Back",
            done_label: "Done",
            stage_padding: 10,
            stage_radius: 8,
        }
    }
}

/// External component that actually draws the tour overlay.
///
/// When the user finishes or closes the tour the host must call
/// [`OnboardingService::on_tour_destroyed`].
pub trait TourDriver {
    fn drive(&mut self, steps: &[TourStep], config: &TourConfig);

    fn destroy(&mut self);
}

/// First-run tour lifecycle: auto-start once, remember completion.
pub struct OnboardingService {
    driver: Box<dyn TourDriver>,
    steps: Vec<TourStep>,
    config: TourConfig,
    completed: Hydration<bool>,
    active: bool,
    delay_ms: u64,
    auto_start_at: Option<u64>,
}

impl std::fmt::Debug for OnboardingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingService")
            .field("steps", &self.steps.len())
            .field("completed", &self.completed)
            .field("active", &self.active)
            .field("auto_start_at", &self.auto_start_at)
            .finish()
    }
}

impl OnboardingService {
    /// Onboarding that auto-starts `settings.onboarding_delay_ms` after hydration.
    pub fn from_settings(driver: Box<dyn TourDriver>, settings: &ViewerSettings) -> Self {
        Self::new(driver, settings.onboarding_delay_ms)
    }

    pub fn new(driver: Box<dyn TourDriver>, delay_ms: u64) -> Self {
        Self {
            driver,
            steps: onboarding_steps(),
            config: TourConfig::default(),
            completed: Hydration::Uninitialized(false),
            active: false,
            delay_ms,
            auto_start_at: None,
        }
    }

    /// Read the completion flag once and, for a first visit, schedule the
    /// automatic start `delay_ms` after `now_ms`.
    pub fn hydrate(&mut self, store: &dyn KeyValueStore, now_ms: u64) {
        if self.completed.is_ready() {
            return;
        }
        let completed = match store.get(ONBOARDING_COMPLETED_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!(error = %e, "failed to read onboarding flag");
                false
            }
        };
        self.completed.hydrate(completed);
        if self.should_auto_start() {
            self.auto_start_at = Some(now_ms + self.delay_ms);
        }
    }

    pub fn is_hydrated(&self) -> bool {
        self.completed.is_ready()
    }

    pub fn is_completed(&self) -> bool {
        self.completed.value()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    /// Hydrated, never completed, and not already running.
    pub fn should_auto_start(&self) -> bool {
        self.is_hydrated() && !self.is_completed() && !self.active
    }

    /// Start the tour if the scheduled auto-start is due. Returns whether it started.
    pub fn poll_auto_start(&mut self, now_ms: u64) -> bool {
        match self.auto_start_at {
            Some(due) if now_ms >= due && self.should_auto_start() => {
                self.auto_start_at = None;
                self.start_tour();
                true
            }
            _ => false,
        }
    }

    /// Start (or restart) the tour. A running tour is torn down first.
    pub fn start_tour(&mut self) {
        if self.active {
            self.driver.destroy();
        }
        self.auto_start_at = None;
        self.active = true;
        info!(steps = self.steps.len(), "onboarding tour started");
        self.driver.drive(&self.steps, &self.config);
    }

    /// The driver closed (finished or dismissed): persist completion.
    pub fn on_tour_destroyed(&mut self, store: &mut dyn KeyValueStore) -> Result<(), CoreError> {
        self.active = false;
        self.completed.replace(true);
        info!("onboarding tour completed");
        store.set(ONBOARDING_COMPLETED_KEY, "true")
    }

    /// Tear down on unmount: cancel a pending auto-start and close the overlay.
    pub fn unmount(&mut self) {
        self.auto_start_at = None;
        if self.active {
            self.driver.destroy();
            self.active = false;
        }
    }
}
