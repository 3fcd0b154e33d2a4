//! # Catalog Commands
//!
//! Home screen, salon search and salon detail.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Salon Search Flow                                    │
//! │                                                                         │
//! │  User types "hair"                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_salons(&catalog, "hair")                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Blank?     YES: whole catalog            │                         │
//! │  │             NO:  case-insensitive match   │                         │
//! │  │                  on name or any service   │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  { salons: [...], summary: "2 salons found" }                           │
//! │                                                                         │
//! │  Catalog order is kept. The same query always gives the same list.     │
//! │  No query is rejected; no match gives "0 salons found".               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

use salon_core::catalog::{categories, featured_salons, filter_salons, find_salon, result_summary};
use salon_core::{Category, Money, PriceTier, Salon};

use crate::error::ApiError;
use crate::state::{AuthStore, CatalogState, ConfigState};

/// Starting price shown next to every service on the detail screen.
pub const STARTING_SERVICE_PRICE: Money = Money::from_dollars(30);

/// Services shown on a salon card before the list is cut off.
const CARD_SERVICE_PREVIEW: usize = 3;

/// Salon card on the home and search screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonCardDto {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub review_count: u32,
    /// e.g. "1.2 km"
    pub distance_label: String,
    pub price_tier: PriceTier,
    /// "$", "$$" or "$$$"
    pub price_badge: &'static str,
    pub image_url: String,
    pub services: Vec<String>,
}

impl From<&Salon> for SalonCardDto {
    fn from(s: &Salon) -> Self {
        SalonCardDto {
            id: s.id.clone(),
            name: s.name.clone(),
            rating: s.rating,
            review_count: s.review_count,
            distance_label: s.distance_label(),
            price_tier: s.price_tier,
            price_badge: s.price_tier.badge(),
            image_url: s.image_url.clone(),
            services: s.service_preview(CARD_SERVICE_PREVIEW).to_vec(),
        }
    }
}

/// Search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub salons: Vec<SalonCardDto>,
    /// e.g. "3 salons found"
    pub summary: String,
}

/// Home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    /// Signed-in user's name, or "Guest"
    pub greeting_name: String,
    pub categories: Vec<Category>,
    pub featured: Vec<SalonCardDto>,
}

/// One row of the detail screen's service picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOptionDto {
    pub name: String,
    /// e.g. "From $30"
    pub from_price: String,
}

/// Salon detail screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonDetailDto {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub review_count: u32,
    pub distance_label: String,
    pub address: String,
    /// e.g. "9:00 AM - 8:00 PM"
    pub hours_label: String,
    pub price_badge: &'static str,
    pub description: String,
    pub image_url: String,
    pub services: Vec<ServiceOptionDto>,
}

impl From<&Salon> for SalonDetailDto {
    fn from(s: &Salon) -> Self {
        let from_price = format!("From {}", STARTING_SERVICE_PRICE.display_whole());
        SalonDetailDto {
            id: s.id.clone(),
            name: s.name.clone(),
            rating: s.rating,
            review_count: s.review_count,
            distance_label: s.distance_label(),
            address: s.address.clone(),
            hours_label: s.hours_label(),
            price_badge: s.price_tier.badge(),
            description: s.description.clone(),
            image_url: s.image_url.clone(),
            services: s
                .services
                .iter()
                .map(|name| ServiceOptionDto {
                    name: name.clone(),
                    from_price: from_price.clone(),
                })
                .collect(),
        }
    }
}

/// Filters the catalog by salon name or service.
///
/// ## Arguments
/// * `query` - Search box text, passed as typed. Blank shows everything.
pub fn search_salons(catalog: &CatalogState, query: &str) -> SearchResponse {
    let start = Instant::now();
    debug!(query = %query, "search_salons command");

    let salons: Vec<SalonCardDto> = filter_salons(query, catalog.salons())
        .iter()
        .map(SalonCardDto::from)
        .collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = salons.len(),
        query = %query,
        "search_salons complete"
    );

    SearchResponse {
        summary: result_summary(salons.len()),
        salons,
    }
}

/// Gets the home screen: greeting, categories and featured salons.
pub fn get_home(catalog: &CatalogState, config: &ConfigState, auth: &AuthStore) -> HomeResponse {
    debug!(featured_count = config.featured_count, "get_home command");

    HomeResponse {
        greeting_name: auth.state().greeting_name().to_string(),
        categories: categories(),
        featured: featured_salons(catalog.salons(), config.featured_count)
            .iter()
            .map(SalonCardDto::from)
            .collect(),
    }
}

/// Gets a salon's detail screen.
///
/// ## Errors
/// `NOT_FOUND` if no salon has this id.
pub fn get_salon(catalog: &CatalogState, id: &str) -> Result<SalonDetailDto, ApiError> {
    debug!(id = %id, "get_salon command");
    let salon = find_salon(catalog.salons(), id)?;
    Ok(SalonDetailDto::from(salon))
}
