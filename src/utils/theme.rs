use serde::{Deserialize, Serialize};

/// Color scheme of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Initial theme from the stored preference and the system setting.
    ///
    /// A stored preference always wins; without one the system setting decides.
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
        match stored {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}
