use serde::{Deserialize, Serialize};

/// Three-way classification of an unrealized profit/loss amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainStatus {
    Positive,
    Negative,
    Zero,
}

impl GainStatus {
    /// Tailwind color classes for text rendered in this status.
    #[must_use]
    pub fn color_class(self) -> &'static str {
        match self {
            GainStatus::Positive => "text-green-600 dark:text-green-300",
            GainStatus::Negative => "text-red-600 dark:text-red-400",
            GainStatus::Zero => "text-gray-500 dark:text-gray-400",
        }
    }

    /// Solid accent color (hex) for this status.
    #[must_use]
    pub fn accent_color(self) -> &'static str {
        match self {
            GainStatus::Positive => "#22C55E",
            GainStatus::Negative => "#EF4444",
            GainStatus::Zero => "#6B7280",
        }
    }
}

impl std::fmt::Display for GainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GainStatus::Positive => write!(f, "positive"),
            GainStatus::Negative => write!(f, "negative"),
            GainStatus::Zero => write!(f, "zero"),
        }
    }
}

/// A gain status together with its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GainStatusInfo {
    pub status: GainStatus,
    pub color_class: &'static str,
    /// Hex fill for solid indicators (e.g. the chart center's gain badge)
    pub accent_color: &'static str,
}

impl From<GainStatus> for GainStatusInfo {
    fn from(status: GainStatus) -> Self {
        Self {
            status,
            color_class: status.color_class(),
            accent_color: status.accent_color(),
        }
    }
}
