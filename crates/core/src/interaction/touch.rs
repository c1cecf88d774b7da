/// Pointer hardware reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputCapabilities {
    /// `navigator.maxTouchPoints` or the platform equivalent
    pub max_touch_points: u32,
}

impl InputCapabilities {
    /// Capabilities of a device without touch input. Also the assumption
    /// before the host has reported anything.
    pub fn pointer_only() -> Self {
        Self::default()
    }

    pub fn touch(max_touch_points: u32) -> Self {
        Self { max_touch_points }
    }

    #[must_use]
    pub fn is_touch_device(&self) -> bool {
        self.max_touch_points > 0
    }
}
