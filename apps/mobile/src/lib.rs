//! # Glow Salon Mobile Library
//!
//! State and command surface for the Glow Salon mobile app. The native
//! shell links this crate, calls [`bootstrap_from_env`] once, and routes
//! every screen action through [`commands`].
//!
//! ## Module Organization
//! ```text
//! salon_mobile_lib/
//! ├── lib.rs          ◄─── You are here (bootstrap & logging)
//! ├── mock_data.rs    ◄─── Salon and appointment tables
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Observable Store<S>
//! │   ├── auth.rs     ◄─── Session store
//! │   ├── theme.rs    ◄─── Theme store
//! │   ├── catalog.rs  ◄─── Salons and appointments
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── auth.rs     ◄─── Login, signup, logout, reset
//! │   ├── theme.rs    ◄─── Dark mode switch
//! │   ├── catalog.rs  ◄─── Home, search, salon detail
//! │   ├── appointments.rs
//! │   ├── booking.rs
//! │   └── profile.rs
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Subscribing
//! ```rust,ignore
//! let ctx = salon_mobile_lib::bootstrap_from_env();
//! ctx.theme.subscribe(|theme| repaint(theme.palette()));
//! ctx.auth.subscribe(|session| route_to(session.is_authenticated()));
//! ```

pub mod commands;
pub mod error;
pub mod mock_data;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AuthStore, CatalogState, ConfigState, ThemeStore};

/// Everything the screens share, built once at launch.
///
/// The shell owns this value and passes references to commands. There are
/// no globals, so tests build as many independent contexts as they like.
#[derive(Debug)]
pub struct AppContext {
    pub config: ConfigState,
    pub auth: AuthStore,
    pub theme: ThemeStore,
    pub catalog: CatalogState,
}

/// Builds the app state from a configuration.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,salon=debug, can be overridden with RUST_LOG        │
/// │                                                                         │
/// │  2. Seed Theme ───────────────────────────────────────────────────────► │
/// │     • config.color_scheme read once; dark only if host says "dark"      │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • AuthStore: anonymous                                              │
/// │     • CatalogState: mock salons and appointments                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn bootstrap(config: ConfigState) -> AppContext {
    init_tracing();

    let theme = ThemeStore::new(config.color_scheme);
    let catalog = CatalogState::mock();

    info!(
        is_dark = theme.is_dark(),
        salons = catalog.salons().len(),
        version = %config.app_version,
        "Glow Salon state initialized"
    );

    AppContext {
        auth: AuthStore::new(),
        theme,
        catalog,
        config,
    }
}

/// [`bootstrap`] with configuration read from `SALON_*` environment
/// variables.
pub fn bootstrap_from_env() -> AppContext {
    bootstrap(ConfigState::from_env())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=salon=trace` - Show trace for salon crates only
/// - Default: `info,salon=debug`
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,salon=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
