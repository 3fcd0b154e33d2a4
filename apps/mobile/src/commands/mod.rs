//! # Commands Module
//!
//! One function per user action, called by the screens.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── auth.rs          ◄─── Login, signup, logout, password reset
//! ├── theme.rs         ◄─── Read and toggle the theme
//! ├── catalog.rs       ◄─── Home screen, search, salon detail
//! ├── appointments.rs  ◄─── Upcoming / past appointments
//! ├── booking.rs       ◄─── Book a service at a salon
//! └── profile.rs       ◄─── Profile screen, configuration
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Screen                                                                 │
//! │  ──────                                                                 │
//! │  Sign Up button pressed                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::auth::signup(&ctx.auth, form)                                │
//! │         │                                                               │
//! │         ├── 1. debug! entry (never the password)                        │
//! │         ├── 2. validate the form    ──► Err(ApiError) ─► alert          │
//! │         ├── 3. call the store       ──► subscribers notified            │
//! │         └── 4. return a camelCase response struct                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn logout(auth: &AuthStore)
//!
//! // Only needs the catalog
//! fn search_salons(catalog: &CatalogState, query: &str)
//!
//! // Needs several
//! fn get_home(catalog: &CatalogState, config: &ConfigState, auth: &AuthStore)
//! ```

pub mod appointments;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod profile;
pub mod theme;
