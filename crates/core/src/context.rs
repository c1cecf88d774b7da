//! Explicitly constructed providers shared by the views of one viewer.
//!
//! Nothing here is a process-wide singleton: every viewer (and every test)
//! builds its own context. Reaching for a provider that was not installed
//! is a wiring mistake and reported immediately as
//! [`CoreError::MissingProvider`].

use crate::errors::CoreError;
use crate::interaction::focus::FocusCoordinator;
use crate::models::settings::ViewerSettings;
use crate::services::onboarding_service::{OnboardingService, TourDriver};
use crate::services::theme_service::ThemeStore;

#[derive(Debug, Default)]
pub struct ViewContext {
    focus: Option<FocusCoordinator>,
    theme: Option<ThemeStore>,
    onboarding: Option<OnboardingService>,
}

impl ViewContext {
    /// An empty context with no providers installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus and theme providers, no onboarding.
    pub fn standard() -> Self {
        Self::new()
            .with_focus(FocusCoordinator::default())
            .with_theme(ThemeStore::new())
    }

    pub fn with_focus(mut self, focus: FocusCoordinator) -> Self {
        self.focus = Some(focus);
        self
    }

    pub fn with_theme(mut self, theme: ThemeStore) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_onboarding(mut self, onboarding: OnboardingService) -> Self {
        self.onboarding = Some(onboarding);
        self
    }

    /// Install onboarding backed by `driver`, delayed per `settings`.
    pub fn with_tour_driver(self, driver: Box<dyn TourDriver>, settings: &ViewerSettings) -> Self {
        self.with_onboarding(OnboardingService::from_settings(driver, settings))
    }

    pub fn focus(&self) -> Result<&FocusCoordinator, CoreError> {
        self.focus.as_ref().ok_or(CoreError::MissingProvider("FocusCoordinator"))
    }

    pub fn focus_mut(&mut self) -> Result<&mut FocusCoordinator, CoreError> {
        self.focus.as_mut().ok_or(CoreError::MissingProvider("FocusCoordinator"))
    }

    pub fn theme(&self) -> Result<&ThemeStore, CoreError> {
        self.theme.as_ref().ok_or(CoreError::MissingProvider("ThemeStore"))
    }

    pub fn theme_mut(&mut self) -> Result<&mut ThemeStore, CoreError> {
        self.theme.as_mut().ok_or(CoreError::MissingProvider("ThemeStore"))
    }

    pub fn onboarding(&self) -> Result<&OnboardingService, CoreError> {
        self.onboarding
            .as_ref()
            .ok_or(CoreError::MissingProvider("OnboardingService"))
    }

    pub fn onboarding_mut(&mut self) -> Result<&mut OnboardingService, CoreError> {
        self.onboarding
            .as_mut()
            .ok_or(CoreError::MissingProvider("OnboardingService"))
    }

    pub fn has_onboarding(&self) -> bool {
        self.onboarding.is_some()
    }
}
