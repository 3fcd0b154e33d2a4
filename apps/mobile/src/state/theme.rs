//! # Theme State
//!
//! Holds the dark/light flag and its palette. The host's color scheme is
//! read once at startup; after that only `toggle` changes the theme.

use tracing::info;

use salon_core::{ColorScheme, ThemeState};

use super::store::{Store, SubscriptionId};

/// The theme store.
#[derive(Debug, Default)]
pub struct ThemeStore {
    store: Store<ThemeState>,
}

impl ThemeStore {
    /// Creates the store from the host platform's color scheme.
    pub fn new(scheme: ColorScheme) -> Self {
        ThemeStore {
            store: Store::new(ThemeState::from_scheme(scheme)),
        }
    }

    pub fn state(&self) -> ThemeState {
        self.store.snapshot()
    }

    pub fn is_dark(&self) -> bool {
        self.store.read(ThemeState::is_dark)
    }

    /// Flips dark/light, recomputes the palette and notifies subscribers.
    ///
    /// ## Returns
    /// The new theme.
    pub fn toggle(&self) -> ThemeState {
        let theme = self.store.update(|s| {
            *s = s.toggled();
            *s
        });
        info!(is_dark = theme.is_dark(), "Theme toggled");
        theme
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeState) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}
