//! # Profile Commands
//!
//! The profile screen and the read-only configuration.

use serde::Serialize;
use tracing::debug;

use salon_core::User;

use crate::state::{AuthStore, ConfigState, ThemeStore};

/// Profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// None when signed out; the screen shows "Guest"
    pub user: Option<User>,
    pub greeting_name: String,
    /// Label of the dark mode switch row
    pub mode_label: &'static str,
    /// e.g. "Version 1.0.0"
    pub version_label: String,
}

/// Gets the profile screen.
pub fn get_profile(auth: &AuthStore, theme: &ThemeStore, config: &ConfigState) -> ProfileResponse {
    debug!("get_profile command");
    let session = auth.state();

    ProfileResponse {
        user: session.current_user().cloned(),
        greeting_name: session.greeting_name().to_string(),
        mode_label: theme.state().mode_label(),
        version_label: config.version_label(),
    }
}

/// Gets the application configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
