//! # Domain Types
//!
//! Core domain types shared by the stores and the screens.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     User        │   │     Salon       │   │  Appointment    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  salon_name     │       │
//! │  │  email          │   │  rating         │   │  service        │       │
//! │  │  phone          │   │  services[]     │   │  date / time    │       │
//! │  │  avatar_url     │   │  open/close     │   │  price (Money)  │       │
//! │  └─────────────────┘   └─────────────────┘   │  status         │       │
//! │   owned by AuthStore    read-only catalog    └─────────────────┘       │
//! │                                               read-only catalog         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Salons and appointments are immutable reference data. Nothing in the
//! app creates or destroys them at runtime.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// User
// =============================================================================

/// The signed-in user.
///
/// Only the auth store creates or clears a `User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: String,
}

// =============================================================================
// Price Tier
// =============================================================================

/// Relative price level of a salon, shown as a dollar-sign badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Budget,
    Moderate,
    Premium,
}

impl PriceTier {
    /// Badge text: `"$"`, `"$$"` or `"$$$"`.
    pub const fn badge(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Premium => "$$$",
        }
    }
}

// =============================================================================
// Salon
// =============================================================================

/// A salon listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Salon {
    /// Unique within the catalog.
    pub id: String,

    pub name: String,

    /// Average rating, 0.0 - 5.0.
    pub rating: f64,

    pub review_count: u32,

    /// Distance from the user in kilometres.
    pub distance_km: f64,

    pub address: String,

    #[ts(as = "String")]
    pub open_time: NaiveTime,

    #[ts(as = "String")]
    pub close_time: NaiveTime,

    pub price_tier: PriceTier,

    pub description: String,

    pub image_url: String,

    /// Services in display order. The search filter matches against these.
    pub services: Vec<String>,
}

impl Salon {
    /// Distance label, e.g. `"1.2 km"`.
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }

    /// Opening hours label, e.g. `"9:00 AM - 8:00 PM"`.
    pub fn hours_label(&self) -> String {
        format!(
            "{} - {}",
            self.open_time.format("%-I:%M %p"),
            self.close_time.format("%-I:%M %p")
        )
    }

    /// Checks whether `service` is on this salon's list (exact match).
    pub fn offers(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// First `n` services, as shown on list cards.
    pub fn service_preview(&self, n: usize) -> &[String] {
        &self.services[..self.services.len().min(n)]
    }
}

// =============================================================================
// Appointment
// =============================================================================

/// Lifecycle of an appointment as shown on the appointments screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
}

impl AppointmentStatus {
    /// Badge text on the appointment card.
    pub const fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Completed => "Completed",
        }
    }
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub salon_name: String,
    pub service: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[ts(as = "String")]
    pub time: NaiveTime,
    pub price: Money,
    pub status: AppointmentStatus,
}

impl Appointment {
    #[inline]
    pub fn is_upcoming(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }

    /// Date label, e.g. `"Dec 15, 2024"`.
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Time label, e.g. `"10:00 AM"`.
    pub fn time_label(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

// =============================================================================
// Category
// =============================================================================

/// A browse category on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_salon() -> Salon {
        Salon {
            id: "1".to_string(),
            name: "Glow Studio".to_string(),
            rating: 4.8,
            review_count: 124,
            distance_km: 1.2,
            address: "12 Rose Lane".to_string(),
            open_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            price_tier: PriceTier::Moderate,
            description: String::new(),
            image_url: String::new(),
            services: vec![
                "Haircut".to_string(),
                "Spa".to_string(),
                "Makeup".to_string(),
                "Nails".to_string(),
            ],
        }
    }

    #[test]
    fn test_salon_labels() {
        let salon = test_salon();
        assert_eq!(salon.distance_label(), "1.2 km");
        assert_eq!(salon.hours_label(), "9:00 AM - 8:00 PM");
    }

    #[test]
    fn test_salon_offers_exact_service() {
        let salon = test_salon();
        assert!(salon.offers("Spa"));
        assert!(!salon.offers("spa"));
        assert!(!salon.offers("Massage"));
    }

    #[test]
    fn test_service_preview_caps_length() {
        let salon = test_salon();
        assert_eq!(salon.service_preview(3).len(), 3);
        assert_eq!(salon.service_preview(10).len(), 4);
    }

    #[test]
    fn test_appointment_labels() {
        let apt = Appointment {
            id: "1".to_string(),
            salon_name: "Glow Studio".to_string(),
            service: "Haircut".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 12, 5).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            price: Money::from_dollars(45),
            status: AppointmentStatus::Upcoming,
        };
        assert!(apt.is_upcoming());
        assert_eq!(apt.date_label(), "Dec 5, 2024");
        assert_eq!(apt.time_label(), "2:30 PM");
        assert_eq!(apt.status.label(), "Upcoming");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&AppointmentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        assert_eq!(PriceTier::Premium.badge(), "$$$");
    }
}
