/// Rate limiter with a leading and a trailing edge.
///
/// The first value after a quiet period passes through immediately. Values
/// submitted inside the interval are held back; only the newest one is kept
/// and it is released by [`Throttle::poll`] once the interval has elapsed,
/// so the consumer always converges on the final input.
///
/// Time is supplied by the caller in milliseconds, which keeps the state
/// machine deterministic and independent of any clock.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval_ms: u64,
    last_run_at: Option<u64>,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due_at: u64,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_run_at: None,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Offer a value. Returns it back if it may be applied now, otherwise
    /// stores it as the pending trailing value (replacing an older one).
    pub fn submit(&mut self, value: T, now_ms: u64) -> Option<T> {
        match self.last_run_at {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => {
                self.pending = Some(Pending {
                    value,
                    due_at: last + self.interval_ms,
                });
                None
            }
            _ => {
                self.last_run_at = Some(now_ms);
                self.pending = None;
                Some(value)
            }
        }
    }

    /// Release the pending value if its time has come.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now_ms >= p.due_at);
        if !due {
            return None;
        }
        self.last_run_at = Some(now_ms);
        self.pending.take().map(|p| p.value)
    }

    /// When the pending value becomes due, if there is one.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without applying it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}
