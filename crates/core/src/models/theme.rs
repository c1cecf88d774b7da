use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Storage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Chart segment colors in light mode (Tailwind 500 tones).
pub const CHART_COLORS_LIGHT: [&str; 8] = [
    "#3B82F6", // blue
    "#10B981", // emerald
    "#F59E0B", // amber
    "#EF4444", // red
    "#8B5CF6", // violet
    "#EC4899", // pink
    "#06B6D4", // cyan
    "#F97316", // orange
];

/// Chart segment colors in dark mode (Tailwind 400 tones).
pub const CHART_COLORS_DARK: [&str; 8] = [
    "#60A5FA", "#34D399", "#FBBF24", "#F87171", "#A78BFA", "#F472B6", "#22D3EE", "#FB923C",
];

/// Light/dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme matching the system `prefers-color-scheme` signal.
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Chart palette for this theme.
    #[must_use]
    pub fn chart_palette(self) -> &'static [&'static str] {
        match self {
            Theme::Light => &CHART_COLORS_LIGHT,
            Theme::Dark => &CHART_COLORS_DARK,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CoreError::InvalidPreference {
                key: THEME_STORAGE_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }
}
