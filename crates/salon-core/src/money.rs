//! # Money Module
//!
//! Provides the `Money` type for service and appointment prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are stored in cents (i64), never as floats.                    │
//! │                                                                         │
//! │    Appointment.price ──► "$45"     (list rows, whole-dollar form)      │
//! │    Service tile      ──► "From $30"                                    │
//! │    Debug / logs      ──► "$45.00"  (Display)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salon_core::money::Money;
//!
//! let price = Money::from_dollars(45);
//! assert_eq!(price.cents(), 4500);
//! assert_eq!(price.to_string(), "$45.00");
//! assert_eq!(price.display_whole(), "$45");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Represents a monetary value in the smallest currency unit (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// Salon price lists are quoted in whole dollars, so this is the
    /// common constructor for catalog data.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Formats the amount the way price tags are shown on screen.
    ///
    /// Whole-dollar amounts drop the cents (`"$45"`); anything else falls
    /// back to the full `Display` form (`"$45.50"`).
    pub fn display_whole(&self) -> String {
        if self.cents_part() == 0 {
            let sign = if self.0 < 0 { "-" } else { "" };
            format!("{}${}", sign, self.dollars().abs())
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}
