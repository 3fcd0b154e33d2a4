//! # Theme Commands
//!
//! The profile screen's dark mode switch.

use serde::Serialize;
use tracing::debug;

use salon_core::{Palette, ThemeState};

use crate::state::ThemeStore;

/// Theme as the screens see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub is_dark: bool,
    pub palette: Palette,
    /// "Dark Mode" or "Light Mode"
    pub mode_label: &'static str,
}

impl From<ThemeState> for ThemeResponse {
    fn from(theme: ThemeState) -> Self {
        ThemeResponse {
            is_dark: theme.is_dark(),
            palette: *theme.palette(),
            mode_label: theme.mode_label(),
        }
    }
}

/// Gets the current theme.
pub fn get_theme(theme: &ThemeStore) -> ThemeResponse {
    debug!("get_theme command");
    theme.state().into()
}

/// Flips dark/light. Subscribers re-render with the new palette.
pub fn toggle_theme(theme: &ThemeStore) -> ThemeResponse {
    debug!("toggle_theme command");
    theme.toggle().into()
}
