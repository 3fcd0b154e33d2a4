//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SALON_*`), set by the mobile shell
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use salon_core::catalog::DEFAULT_FEATURED_COUNT;
use salon_core::ColorScheme;

/// Host color scheme preference (`"dark"` or `"light"`).
pub const ENV_COLOR_SCHEME: &str = "SALON_COLOR_SCHEME";

/// Number of salons in the home screen's featured strip.
pub const ENV_FEATURED_COUNT: &str = "SALON_FEATURED_COUNT";

/// Version string shown at the bottom of the profile screen.
pub const ENV_APP_VERSION: &str = "SALON_APP_VERSION";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Color scheme reported by the host platform at launch.
    /// Consumed once, to seed the theme store.
    pub color_scheme: ColorScheme,

    /// How many salons the home screen features.
    pub featured_count: usize,

    /// Displayed as "Version {app_version}".
    pub app_version: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Color scheme: light
    /// - Featured salons: 3
    /// - Version: 1.0.0
    fn default() -> Self {
        ConfigState {
            color_scheme: ColorScheme::Light,
            featured_count: DEFAULT_FEATURED_COUNT,
            app_version: "1.0.0".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SALON_COLOR_SCHEME`: exactly `"dark"` for dark, anything else is light
    /// - `SALON_FEATURED_COUNT`: featured salon count (ignored if not a number)
    /// - `SALON_APP_VERSION`: version label
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        config.color_scheme = ColorScheme::from_system(lookup(ENV_COLOR_SCHEME).as_deref());

        if let Some(raw) = lookup(ENV_FEATURED_COUNT) {
            match raw.trim().parse::<usize>() {
                Ok(count) => config.featured_count = count,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", ENV_FEATURED_COUNT),
            }
        }

        if let Some(version) = lookup(ENV_APP_VERSION) {
            config.app_version = version;
        }

        config
    }

    /// Footer text on the profile screen, e.g. `"Version 1.0.0"`.
    pub fn version_label(&self) -> String {
        format!("Version {}", self.app_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.version_label(), "Version 1.0.0");
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_COLOR_SCHEME, "dark"),
            (ENV_FEATURED_COUNT, "5"),
            (ENV_APP_VERSION, "2.1.0"),
        ]));
        assert_eq!(config.color_scheme, ColorScheme::Dark);
        assert_eq!(config.featured_count, 5);
        assert_eq!(config.app_version, "2.1.0");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_COLOR_SCHEME, "DARK"),
            (ENV_FEATURED_COUNT, "lots"),
        ]));
        assert_eq!(config.color_scheme, ColorScheme::Light);
        assert_eq!(config.featured_count, DEFAULT_FEATURED_COUNT);
    }
}
