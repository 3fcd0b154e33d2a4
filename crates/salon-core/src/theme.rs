//! # Theme Module
//!
//! Color palettes and the dark/light theme state.
//!
//! ## Palette Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   host color scheme ──► ColorScheme ──► ThemeState { is_dark, palette } │
//! │   ("dark" / "light")      (once)              │                         │
//! │                                               │ toggled()               │
//! │                                               ▼                         │
//! │                                   ThemeState { !is_dark, palette' }     │
//! │                                                                         │
//! │   palette is ALWAYS Palette::for_dark(is_dark); it is never set alone   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Color Scheme
// =============================================================================

/// The color scheme reported by the host platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Interprets the platform's preference signal.
    ///
    /// Only the exact string `"dark"` selects the dark scheme. Anything
    /// else, including other casings, padding, or an absent preference,
    /// falls back to light.
    pub fn from_system(preference: Option<&str>) -> Self {
        match preference {
            Some("dark") => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }

    #[inline]
    pub const fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Semantic color roles, as `#RRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: "#7C3AED",
        secondary: "#3B82F6",
        background: "#FFFFFF",
        surface: "#F8F9FA",
        card: "#FFFFFF",
        text: "#212529",
        text_secondary: "#6C757D",
        border: "#DEE2E6",
        success: "#28A745",
        error: "#DC3545",
        warning: "#FFC107",
    };

    pub const DARK: Palette = Palette {
        primary: "#8B5CF6",
        secondary: "#3B82F6",
        background: "#0F172A",
        surface: "#1E293B",
        card: "#1E293B",
        text: "#FFFFFF",
        text_secondary: "#B0B0B0",
        border: "#3A3A3A",
        success: "#28A745",
        error: "#DC3545",
        warning: "#FFC107",
    };

    /// The palette for a dark flag.
    #[inline]
    pub const fn for_dark(is_dark: bool) -> &'static Palette {
        if is_dark {
            &Palette::DARK
        } else {
            &Palette::LIGHT
        }
    }
}

// =============================================================================
// Theme State
// =============================================================================

/// Snapshot of the theme: the dark flag and its palette.
///
/// ## Invariant
/// `palette == *Palette::for_dark(is_dark)`. Fields are private so the
/// palette can only change together with the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    is_dark: bool,
    palette: Palette,
}

impl ThemeState {
    pub const fn new(is_dark: bool) -> Self {
        ThemeState {
            is_dark,
            palette: *Palette::for_dark(is_dark),
        }
    }

    pub const fn from_scheme(scheme: ColorScheme) -> Self {
        ThemeState::new(scheme.is_dark())
    }

    /// Returns the state with the dark flag flipped and the palette
    /// recomputed.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        ThemeState::new(!self.is_dark)
    }

    #[inline]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[inline]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    pub const fn scheme(&self) -> ColorScheme {
        if self.is_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Label for the settings row: `"Dark Mode"` or `"Light Mode"`.
    pub const fn mode_label(&self) -> &'static str {
        if self.is_dark {
            "Dark Mode"
        } else {
            "Light Mode"
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState::from_scheme(ColorScheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_system_preference() {
        assert_eq!(ColorScheme::from_system(Some("dark")), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_system(Some("Dark")), ColorScheme::Light);
        assert_eq!(ColorScheme::from_system(Some("dark ")), ColorScheme::Light);
        assert_eq!(ColorScheme::from_system(Some("light")), ColorScheme::Light);
        assert_eq!(ColorScheme::from_system(Some("no-preference")), ColorScheme::Light);
        assert_eq!(ColorScheme::from_system(None), ColorScheme::Light);
    }

    #[test]
    fn test_palette_matches_flag() {
        let light = ThemeState::new(false);
        assert_eq!(*light.palette(), Palette::LIGHT);
        assert_eq!(light.palette().background, "#FFFFFF");

        let dark = ThemeState::new(true);
        assert_eq!(*dark.palette(), Palette::DARK);
        assert_eq!(dark.palette().background, "#0F172A");
    }

    #[test]
    fn test_toggle_is_involutive() {
        for start in [ThemeState::new(false), ThemeState::new(true)] {
            let once = start.toggled();
            assert_ne!(once.is_dark(), start.is_dark());
            assert_eq!(*once.palette(), *Palette::for_dark(once.is_dark()));
            assert_eq!(once.toggled(), start);
        }
    }

    #[test]
    fn test_mode_label() {
        assert_eq!(ThemeState::new(true).mode_label(), "Dark Mode");
        assert_eq!(ThemeState::default().mode_label(), "Light Mode");
        assert_eq!(ThemeState::default().scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_theme_state_json_shape() {
        let json = serde_json::to_value(ThemeState::new(true)).unwrap();
        assert_eq!(json["isDark"], true);
        assert_eq!(json["palette"]["textSecondary"], "#B0B0B0");
    }
}
