use tracing::debug;

/// Which holding, if any, is singled out across chart and list.
///
/// The index points into the holdings sorted by holding ratio (descending),
/// the one order both views iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    FocusedOn(usize),
}

impl FocusState {
    pub fn index(self) -> Option<usize> {
        match self {
            FocusState::Unfocused => None,
            FocusState::FocusedOn(i) => Some(i),
        }
    }

    pub fn is_focused(self) -> bool {
        matches!(self, FocusState::FocusedOn(_))
    }
}

/// Where a click landed. A click is delivered to exactly one target, so a
/// click on the chart or the list never also counts as an outside click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A donut segment
    ChartSegment(usize),
    /// A holdings list row
    ListRow(usize),
    /// The donut hole
    ChartCenter,
    /// Chart or list container, but not a segment, row or the hole
    Inside,
    /// Anywhere else in the document
    Outside,
}

/// Side effect the host must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEffect {
    /// Scroll the list row into the middle of the viewport, smoothly.
    ScrollRowIntoView { index: usize },
}

/// Single owner of the focus state.
#[derive(Debug, Clone, Default)]
pub struct FocusCoordinator {
    state: FocusState,
    len: usize,
    touch_device: bool,
}

impl FocusCoordinator {
    /// Coordinator over `len` holdings, starting unfocused.
    pub fn new(len: usize) -> Self {
        Self {
            state: FocusState::Unfocused,
            len,
            touch_device: false,
        }
    }

    /// Enable the scroll-into-view effect for touch input.
    pub fn set_touch_device(&mut self, touch_device: bool) {
        self.touch_device = touch_device;
    }

    /// Re-initialize for a freshly loaded holdings list.
    pub fn reset(&mut self, len: usize) {
        self.state = FocusState::Unfocused;
        self.len = len;
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Route a click to the matching transition.
    pub fn dispatch(&mut self, target: ClickTarget) -> Option<FocusEffect> {
        match target {
            ClickTarget::ChartSegment(i) | ClickTarget::ListRow(i) => self.click(i),
            ClickTarget::ChartCenter => {
                self.click_center();
                None
            }
            ClickTarget::Outside => {
                self.click_outside();
                None
            }
            ClickTarget::Inside => None,
        }
    }

    /// Focus `index`, or toggle it off if it is already focused.
    /// Indices past the end of the list are ignored.
    pub fn click(&mut self, index: usize) -> Option<FocusEffect> {
        if index >= self.len {
            debug!(index, len = self.len, "ignoring click on unknown holding");
            return None;
        }
        let next = match self.state {
            FocusState::FocusedOn(current) if current == index => FocusState::Unfocused,
            _ => FocusState::FocusedOn(index),
        };
        debug!(from = ?self.state, to = ?next, "focus transition");
        self.state = next;

        match next {
            FocusState::FocusedOn(index) if self.touch_device => {
                Some(FocusEffect::ScrollRowIntoView { index })
            }
            _ => None,
        }
    }

    /// A click outside both views clears focus.
    pub fn click_outside(&mut self) {
        if self.state.is_focused() {
            debug!(from = ?self.state, "focus cleared by outside click");
            self.state = FocusState::Unfocused;
        }
    }

    /// The donut hole clears focus; it is inert while nothing is focused.
    /// Returns whether the click was handled.
    pub fn click_center(&mut self) -> bool {
        if !self.center_clickable() {
            return false;
        }
        debug!(from = ?self.state, "focus cleared from chart center");
        self.state = FocusState::Unfocused;
        true
    }

    pub fn center_clickable(&self) -> bool {
        self.state.is_focused()
    }

    /// Row `index` carries the highlight ring.
    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.state == FocusState::FocusedOn(index)
    }

    /// Row or segment `index` is faded because another one is focused.
    #[must_use]
    pub fn is_dimmed(&self, index: usize) -> bool {
        matches!(self.state, FocusState::FocusedOn(i) if i != index)
    }

    /// Segment opacity: full unless another segment is focused.
    #[must_use]
    pub fn opacity(&self, index: usize, dimmed_opacity: f64) -> f64 {
        if self.is_dimmed(index) {
            dimmed_opacity
        } else {
            1.0
        }
    }
}
