//! # salon-core: Pure Domain Logic for Glow Salon
//!
//! This crate holds everything about the salon-booking app that does not
//! touch state or the platform: domain types, color palettes, the catalog
//! search filter, and form validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Glow Salon Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Screens (React Native, not in Rust)             │   │
//! │  │    Login ─ Signup ─ Home ─ Search ─ Salon Detail ─ Profile      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/mobile                                  │   │
//! │  │    AuthStore, ThemeStore (subscribe / notify), commands         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ salon-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   theme   │  │  catalog  │  │ validation│  │   │
//! │  │   │  Salon    │  │  Palette  │  │  filter   │  │   forms   │  │   │
//! │  │   │  User     │  │ ThemeState│  │  featured │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Salon, Appointment, etc.)
//! - [`money`] - Integer-cents price type
//! - [`theme`] - Light/dark palettes and `ThemeState`
//! - [`catalog`] - Search filter and read-only catalog views
//! - [`validation`] - Form checks run before calling a store
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use salon_core::theme::ThemeState;
//!
//! let theme = ThemeState::new(false);
//! assert_eq!(theme.palette().primary, "#7C3AED");
//! assert!(theme.toggled().is_dark());
//! ```

pub mod catalog;
pub mod error;
pub mod money;
pub mod theme;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use theme::{ColorScheme, Palette, ThemeState};
pub use types::*;
