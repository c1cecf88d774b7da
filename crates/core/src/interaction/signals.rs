//! Single-threaded hub for window-level signals (resize, color scheme,
//! timer ticks). Views subscribe when they mount and unsubscribe when they
//! unmount; every subscriber owns its own state.

use tracing::debug;

/// A window-level signal delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The viewport was resized to `width` pixels at `at_ms`.
    Resized { width: u32, at_ms: u64 },
    /// The system `prefers-color-scheme` setting changed.
    ColorSchemeChanged { prefers_dark: bool },
    /// A timer tick. Subscribers flush deferred (trailing-edge) work here.
    Tick { at_ms: u64 },
}

/// Handle returned by [`ViewportSignals::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ViewportEvent)>;

#[derive(Default)]
pub struct ViewportSignals {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl std::fmt::Debug for ViewportSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportSignals")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ViewportSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ViewportEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(id = id.0, total = self.listeners.len(), "viewport listener subscribed");
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(id = id.0, total = self.listeners.len(), "viewport listener removed");
        }
        removed
    }

    /// Deliver an event to every listener in subscription order.
    pub fn emit(&mut self, event: ViewportEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
