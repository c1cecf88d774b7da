/// Two-phase state for values only known once the client environment is up.
///
/// Before startup the placeholder is rendered so the first and second
/// render agree; `hydrate` moves to `Ready` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration<T> {
    Uninitialized(T),
    Ready(T),
}

impl<T: Copy> Hydration<T> {
    /// The value to render right now (placeholder or real).
    pub fn value(&self) -> T {
        match self {
            Hydration::Uninitialized(v) | Hydration::Ready(v) => *v,
        }
    }
}

impl<T> Hydration<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Hydration::Ready(_))
    }

    /// Fire the one-time transition. Returns `false` (and keeps the current
    /// value) if already hydrated.
    pub fn hydrate(&mut self, value: T) -> bool {
        if self.is_ready() {
            return false;
        }
        *self = Hydration::Ready(value);
        true
    }

    /// Store a value directly. An explicit value also counts as hydrated.
    pub fn replace(&mut self, value: T) {
        *self = Hydration::Ready(value);
    }
}
