//! # State Module
//!
//! Manages application state for the mobile app.
//!
//! One state type per concern rather than a single `AppState`. Commands
//! take exactly the states they need as arguments.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppContext (lib.rs)                        │   │
//! │  │  built once by bootstrap(config), owned by the mobile shell     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌──────────────┬────────┴───────┬──────────────────┐               │
//! │      ▼              ▼                ▼                  ▼               │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────────┐  ┌──────────────┐        │
//! │  │AuthStore │  │ThemeStore│  │ CatalogState │  │ ConfigState  │        │
//! │  │          │  │          │  │              │  │              │        │
//! │  │ Store<   │  │ Store<   │  │ salons       │  │ color_scheme │        │
//! │  │ AuthState│  │ Theme    │  │ appointments │  │ featured_cnt │        │
//! │  │ >        │  │ State>   │  │              │  │ app_version  │        │
//! │  └──────────┘  └──────────┘  └──────────────┘  └──────────────┘        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • AuthStore, ThemeStore: RwLock inside Store<S>; updates serialized,  │
//! │    listeners notified in mutation order after the state lock is freed │
//! │  • CatalogState, ConfigState: read-only after initialization           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod catalog;
mod config;
mod store;
mod theme;

pub use auth::{
    AuthOutcome, AuthState, AuthStore, PasswordReset, GUEST_NAME, PASSWORD_RESET_MESSAGE,
    PLACEHOLDER_AVATAR_URL, PLACEHOLDER_NAME, PLACEHOLDER_PHONE, PLACEHOLDER_USER_ID,
};
pub use catalog::CatalogState;
pub use config::{ConfigState, ENV_APP_VERSION, ENV_COLOR_SCHEME, ENV_FEATURED_COUNT};
pub use store::{Store, SubscriptionId};
pub use theme::ThemeStore;
