use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::interaction::signals::{SubscriptionId, ViewportEvent, ViewportSignals};
use crate::models::hydration::Hydration;
use crate::models::theme::{Theme, THEME_STORAGE_KEY};
use crate::storage::traits::KeyValueStore;

#[derive(Debug)]
struct ThemeState {
    theme: Hydration<Theme>,
    /// The user picked a theme (now or in a past session); system changes
    /// no longer apply.
    explicit: bool,
}

impl ThemeState {
    fn follow_system(&mut self, prefers_dark: bool) {
        if self.explicit || !self.theme.is_ready() {
            return;
        }
        let next = Theme::from_system(prefers_dark);
        if next != self.theme.value() {
            debug!(theme = %next, "theme follows system color scheme");
            self.theme.replace(next);
        }
    }
}

/// Light/dark preference with persistence and system fallback.
///
/// Renders `Light` until [`ThemeStore::hydrate`] has read the stored
/// preference. Construct one per view tree; nothing here is global.
#[derive(Debug)]
pub struct ThemeStore {
    state: Rc<RefCell<ThemeState>>,
    subscription: Option<SubscriptionId>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ThemeState {
                theme: Hydration::Uninitialized(Theme::Light),
                explicit: false,
            })),
            subscription: None,
        }
    }

    /// One-time startup step: use the stored theme if valid, otherwise the
    /// system preference. Later calls return the current theme unchanged.
    pub fn hydrate(&mut self, store: &dyn KeyValueStore, system_prefers_dark: bool) -> Theme {
        let mut state = self.state.borrow_mut();
        if state.theme.is_ready() {
            return state.theme.value();
        }

        let stored = match store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!(error = %e, "ignoring stored theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read stored theme");
                None
            }
        };

        let theme = match stored {
            Some(theme) => {
                state.explicit = true;
                theme
            }
            None => Theme::from_system(system_prefers_dark),
        };
        state.theme.hydrate(theme);
        debug!(theme = %theme, explicit = state.explicit, "theme hydrated");
        theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.borrow().theme.value()
    }

    pub fn is_hydrated(&self) -> bool {
        self.state.borrow().theme.is_ready()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme() == Theme::Dark
    }

    /// Apply and persist an explicit choice. The in-memory theme changes
    /// even if the write fails; the error is returned to the caller.
    pub fn set_theme(&mut self, theme: Theme, store: &mut dyn KeyValueStore) -> Result<(), CoreError> {
        {
            let mut state = self.state.borrow_mut();
            state.theme.replace(theme);
            state.explicit = true;
        }
        debug!(theme = %theme, "theme set");
        store.set(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn toggle_theme(&mut self, store: &mut dyn KeyValueStore) -> Result<Theme, CoreError> {
        let next = self.theme().toggled();
        self.set_theme(next, store)?;
        Ok(next)
    }

    /// Chart colors for the current theme.
    pub fn chart_palette(&self) -> &'static [&'static str] {
        self.theme().chart_palette()
    }

    /// React to a system color-scheme change (ignored after an explicit choice).
    pub fn on_system_scheme_changed(&mut self, prefers_dark: bool) {
        self.state.borrow_mut().follow_system(prefers_dark);
    }

    /// Subscribe to system color-scheme changes.
    pub fn mount(&mut self, signals: &mut ViewportSignals) {
        if self.subscription.is_some() {
            return;
        }
        let state = Rc::clone(&self.state);
        let id = signals.subscribe(move |event| {
            if let ViewportEvent::ColorSchemeChanged { prefers_dark } = *event {
                state.borrow_mut().follow_system(prefers_dark);
            }
        });
        self.subscription = Some(id);
    }

    pub fn unmount(&mut self, signals: &mut ViewportSignals) {
        if let Some(id) = self.subscription.take() {
            signals.unsubscribe(id);
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}
