//! # Catalog Module
//!
//! Read-only views over the static salon and appointment tables, including
//! the search filter used by the search screen on every keystroke.
//!
//! ## Search Matching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  filter_salons("hair", catalog)                                         │
//! │                                                                         │
//! │  query blank? ──yes──► whole catalog, same order                        │
//! │       │                                                                 │
//! │       no                                                                │
//! │       ▼                                                                 │
//! │  needle = query.to_lowercase()                                          │
//! │       │                                                                 │
//! │       ▼  for each salon, in catalog order                               │
//! │  name.to_lowercase() contains needle?          ──yes──► keep            │
//! │  any service.to_lowercase() contains needle?   ──yes──► keep            │
//! │  otherwise                                     ──────► drop            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The filter is pure: same query and catalog, same output. No match is an
//! empty vector, never an error.

use crate::error::{CoreError, CoreResult};
use crate::types::{Appointment, Category, Salon};

/// Category names on the home screen, in display order.
pub const CATEGORY_NAMES: [&str; 4] = ["Haircut", "Spa", "Makeup", "Nails"];

/// Default number of salons in the home screen's featured strip.
pub const DEFAULT_FEATURED_COUNT: usize = 3;

// =============================================================================
// Search Filter
// =============================================================================

/// Returns the salons matching `query`, preserving catalog order.
///
/// ## Rules
/// - Case-insensitive substring match against the salon name and every
///   service name
/// - A blank query (empty or whitespace only) returns the whole catalog
/// - A non-blank query is matched as typed; surrounding whitespace is
///   part of the needle
///
/// ## Example
/// ```rust
/// use salon_core::catalog::filter_salons;
/// # use salon_core::types::{PriceTier, Salon};
/// # use chrono::NaiveTime;
/// # fn salon(name: &str, services: &[&str]) -> Salon {
/// #     Salon {
/// #         id: name.to_string(), name: name.to_string(), rating: 4.5,
/// #         review_count: 10, distance_km: 1.0, address: String::new(),
/// #         open_time: NaiveTime::MIN, close_time: NaiveTime::MIN,
/// #         price_tier: PriceTier::Moderate, description: String::new(),
/// #         image_url: String::new(),
/// #         services: services.iter().map(|s| s.to_string()).collect(),
/// #     }
/// # }
/// let catalog = vec![
///     salon("Glow Studio", &["Haircut", "Spa"]),
///     salon("Nail Bar", &["Nails"]),
/// ];
///
/// let found = filter_salons("hair", &catalog);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Glow Studio");
/// ```
pub fn filter_salons(query: &str, catalog: &[Salon]) -> Vec<Salon> {
    if query.trim().is_empty() {
        return catalog.to_vec();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|salon| matches_query(salon, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(salon: &Salon, needle: &str) -> bool {
    salon.name.to_lowercase().contains(needle)
        || salon
            .services
            .iter()
            .any(|service| service.to_lowercase().contains(needle))
}

/// Result count line under the search box, e.g. `"3 salons found"`.
pub fn result_summary(count: usize) -> String {
    format!("{} salons found", count)
}

// =============================================================================
// Salon Lookups
// =============================================================================

/// The first `count` salons of the catalog.
pub fn featured_salons(catalog: &[Salon], count: usize) -> &[Salon] {
    &catalog[..catalog.len().min(count)]
}

/// Finds a salon by id.
pub fn find_salon<'a>(catalog: &'a [Salon], id: &str) -> CoreResult<&'a Salon> {
    catalog
        .iter()
        .find(|salon| salon.id == id)
        .ok_or_else(|| CoreError::SalonNotFound(id.to_string()))
}

/// The home screen categories, ids `"1"` through `"4"`.
pub fn categories() -> Vec<Category> {
    CATEGORY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

// =============================================================================
// Appointment Grouping
// =============================================================================

/// Appointments split the way the appointments screen shows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentGroups {
    pub upcoming: Vec<Appointment>,
    pub past: Vec<Appointment>,
}

impl AppointmentGroups {
    /// Splits into upcoming and completed, each keeping input order.
    pub fn partition(appointments: &[Appointment]) -> Self {
        let (upcoming, past) = appointments
            .iter()
            .cloned()
            .partition(Appointment::is_upcoming);
        AppointmentGroups { upcoming, past }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }
}
