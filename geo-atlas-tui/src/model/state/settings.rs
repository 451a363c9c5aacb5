//! Settings page state

use serde::{Deserialize, Serialize};

/// Colour scheme of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Index understood by `view::theme::set_theme_index`.
    pub fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

#[derive(Debug, Default)]
pub struct SettingsState {
    pub theme: Theme,
}

impl SettingsState {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Only two themes, so previous and next are the same move.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.next();
    }
}
