use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::models::settings::ViewerSettings;
use crate::models::view::Breakpoint;

use super::signals::{SubscriptionId, ViewportEvent, ViewportSignals};
use super::throttle::Throttle;

#[derive(Debug)]
struct TrackerState {
    breakpoint: Breakpoint,
    throttle: Throttle<u32>,
    tablet_min: u32,
    desktop_min: u32,
}

impl TrackerState {
    fn apply(&mut self, width: u32) {
        let next = Breakpoint::classify(width, self.tablet_min, self.desktop_min);
        if next != self.breakpoint {
            debug!(width, from = ?self.breakpoint, to = ?next, "breakpoint changed");
            self.breakpoint = next;
        }
    }

    fn handle(&mut self, event: &ViewportEvent) {
        match *event {
            ViewportEvent::Resized { width, at_ms } => {
                if let Some(width) = self.throttle.submit(width, at_ms) {
                    self.apply(width);
                }
            }
            ViewportEvent::Tick { at_ms } => {
                if let Some(width) = self.throttle.poll(at_ms) {
                    self.apply(width);
                }
            }
            ViewportEvent::ColorSchemeChanged { .. } => {}
        }
    }
}

/// Tracks the responsive breakpoint from throttled resize signals.
///
/// Each tracker owns its throttle, so two trackers on the same hub never
/// interfere. Unmounting drops any trailing update that has not fired yet.
#[derive(Debug)]
pub struct BreakpointTracker {
    state: Rc<RefCell<TrackerState>>,
    subscription: Option<SubscriptionId>,
}

impl BreakpointTracker {
    /// `initial_width` is `None` when the viewport is not known yet, in which
    /// case the tracker starts at `Desktop`.
    pub fn new(initial_width: Option<u32>, settings: &ViewerSettings) -> Self {
        let breakpoint = initial_width
            .map(|w| Breakpoint::classify(w, settings.tablet_min_width, settings.desktop_min_width))
            .unwrap_or(Breakpoint::Desktop);
        Self {
            state: Rc::new(RefCell::new(TrackerState {
                breakpoint,
                throttle: Throttle::new(settings.resize_throttle_ms),
                tablet_min: settings.tablet_min_width,
                desktop_min: settings.desktop_min_width,
            })),
            subscription: None,
        }
    }

    /// Start listening. Mounting twice is a no-op.
    pub fn mount(&mut self, signals: &mut ViewportSignals) {
        if self.subscription.is_some() {
            return;
        }
        let state = Rc::clone(&self.state);
        let id = signals.subscribe(move |event| state.borrow_mut().handle(event));
        self.subscription = Some(id);
    }

    /// Stop listening and cancel the pending trailing update.
    pub fn unmount(&mut self, signals: &mut ViewportSignals) {
        if let Some(id) = self.subscription.take() {
            signals.unsubscribe(id);
            self.state.borrow_mut().throttle.cancel();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Breakpoint {
        self.state.borrow().breakpoint
    }

    /// When the deferred resize becomes due, so the host can schedule a tick.
    pub fn next_due(&self) -> Option<u64> {
        self.state.borrow().throttle.next_due()
    }
}
